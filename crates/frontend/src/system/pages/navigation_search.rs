//! Иерархическая навигация: домен -> субдомен с количеством записей.
//!
//! Субдомены без записей видны только в режиме администратора.

use crate::layout::global_context::use_global_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::query::filters_to_query;
use contracts::catalog::{Domain, DomainCatalog};
use contracts::directory::{FilterState, SubdomainCount};
use leptos::prelude::*;
use leptos_router::components::A;

/// Узел дерева навигации
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainNode {
    pub domain: Domain,
    pub total: usize,
    pub subdomains: Vec<SubdomainCount>,
}

impl DomainNode {
    /// Видимые субдомены; пустые только для администратора
    pub fn visible_subdomains(&self, admin_mode: bool) -> Vec<SubdomainCount> {
        self.subdomains
            .iter()
            .filter(|s| admin_mode || s.count > 0)
            .cloned()
            .collect()
    }
}

pub fn build_tree() -> Vec<DomainNode> {
    Domain::all()
        .into_iter()
        .filter_map(|domain| match DomainCatalog::load(domain) {
            Ok(catalog) => Some(DomainNode {
                domain,
                total: catalog.store.len(),
                subdomains: catalog.store.subdomain_counts(),
            }),
            Err(err) => {
                log::error!("Failed to load {} catalog: {}", domain, err);
                None
            }
        })
        .collect()
}

/// Ссылка на директорию, отфильтрованную по субдомену
pub fn subdomain_link(domain: Domain, subdomain: &str) -> String {
    let filters = FilterState::default().with_subdomain(Some(subdomain.to_string()));
    format!("{}?{}", domain.directory_path(), filters_to_query(&filters))
}

#[component]
pub fn NavigationSearchPage() -> impl IntoView {
    let ctx = use_global_context();
    let tree = build_tree();
    let selected = RwSignal::new(tree.first().map(|node| node.domain));

    let domain_list = tree
        .iter()
        .map(|node| {
            let domain = node.domain;
            let total = node.total;
            let class = move || {
                if selected.get() == Some(domain) {
                    "nav-tree__domain nav-tree__domain--active"
                } else {
                    "nav-tree__domain"
                }
            };
            view! {
                <button class=class on:click=move |_| selected.set(Some(domain))>
                    {move || if selected.get() == Some(domain) {
                        icon("chevron-down")
                    } else {
                        icon("chevron-right")
                    }}
                    <span>{domain.display_name()}</span>
                    <span class="nav-tree__count">{total}</span>
                </button>
            }
        })
        .collect_view();

    let subdomain_list = move || {
        let Some(node) = selected
            .get()
            .and_then(|domain| tree.iter().find(|node| node.domain == domain))
        else {
            return view! { <p class="nav-tree__empty">"Select a domain"</p> }.into_any();
        };
        let domain = node.domain;
        node.visible_subdomains(ctx.admin_mode.get())
            .into_iter()
            .map(|entry| {
                let href = subdomain_link(domain, &entry.subdomain);
                let class = if entry.count == 0 {
                    "nav-tree__subdomain nav-tree__subdomain--empty"
                } else {
                    "nav-tree__subdomain"
                };
                view! {
                    <A href=href>
                        <span class=class>
                            <span>{entry.subdomain}</span>
                            <span class="nav-tree__count">{entry.count}</span>
                        </span>
                    </A>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="page navigation-search-page">
            <PageHeader
                title="Find Dashboards"
                subtitle="Browse by domain and subdomain".to_string()
                breadcrumbs=vec![("Find Dashboards".to_string(), None)]
            >
                {()}
            </PageHeader>
            <div class="nav-tree">
                <div class="nav-tree__domains">{domain_list}</div>
                <div class="nav-tree__subdomains">{subdomain_list}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_covers_all_domains() {
        let tree = build_tree();
        assert_eq!(tree.len(), 3);
        for node in &tree {
            let sum: usize = node.subdomains.iter().map(|s| s.count).sum();
            assert_eq!(sum, node.total);
        }
    }

    #[test]
    fn test_empty_subdomains_hidden_outside_admin_mode() {
        let node = DomainNode {
            domain: Domain::Finance,
            total: 2,
            subdomains: vec![
                SubdomainCount { subdomain: "FP&A".into(), count: 2 },
                SubdomainCount { subdomain: "Tax".into(), count: 0 },
            ],
        };
        assert_eq!(node.visible_subdomains(false).len(), 1);
        assert_eq!(node.visible_subdomains(true).len(), 2);
    }

    #[test]
    fn test_subdomain_link_is_query_encoded() {
        let href = subdomain_link(Domain::Merchandising, "Pricing & Promotions");
        assert!(href.starts_with("/merchandising/directory?subdomain="));
        assert!(!href.contains(" & "));
    }
}

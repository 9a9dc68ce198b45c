use crate::templates::components::header;
use maud::{html, Markup, DOCTYPE};

/// Every page shares this shell; `page_class` picks the page modifier (`page--gray` etc).
pub fn page_layout(title: &str, is_authorized: bool, page_class: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="icon" href="/favicon.ico";
                link rel="stylesheet" href="/css/main.css";
                script src="/js/map.js" defer {}
            }
            body {
                div class=(format!("page {page_class}")) {
                    (header(is_authorized))
                    (content)
                }
            }
        }
    }
}

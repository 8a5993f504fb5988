use maud::{html, Markup, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                script src=(HTMX_SRC) defer {};
                style {
                    "body { font-family: system-ui, sans-serif; margin: 2rem; }"
                    "table { border-collapse: collapse; }"
                    "th, td { padding: 6px 10px; border-bottom: 1px solid #e5e7eb; text-align: left; }"
                    "tr.paid { background-color: green; }"
                }
            }
            body {
                header {
                    h3 { "Booking Taxes" }
                }
                (content)
            }
        }
    }
}

use maud::{html, Markup, PreEscaped, DOCTYPE};

// Tiny stylesheet served inline; there is no static asset pipeline.
const STYLE: &str = r#"
body { font-family: sans-serif; background: #f9fafb; color: #1f2937; margin: 0; }
header.site { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; background: white; box-shadow: 0 1px 2px rgba(0,0,0,0.08); }
main.browse { display: grid; grid-template-columns: 1fr 3fr; gap: 1.5rem; max-width: 80rem; margin: 1.5rem auto; padding: 0 1.5rem; }
.card { background: white; border-radius: 0.375rem; box-shadow: 0 1px 2px rgba(0,0,0,0.08); padding: 1rem; margin-bottom: 1rem; }
.grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
.input { padding: 0.5rem; border: 1px solid #e5e7eb; border-radius: 0.375rem; width: 100%; box-sizing: border-box; }
.btn-primary { background: #0ea5a4; color: white; padding: 0.5rem 0.75rem; border-radius: 0.375rem; border: none; text-decoration: none; }
.btn-ghost { background: transparent; border: 1px solid #e5e7eb; padding: 0.5rem 0.75rem; border-radius: 0.375rem; color: inherit; text-decoration: none; }
.chip { padding: 0.25rem 0.5rem; background: #f3f4f6; border-radius: 0.25rem; font-size: 0.75rem; }
.muted { color: #6b7280; font-size: 0.875rem; }
.star { text-decoration: none; }
.star.saved { color: #ca8a04; }
article.listing img { width: 100%; height: 11rem; object-fit: cover; border-radius: 0.375rem 0.375rem 0 0; }
.pager { display: flex; align-items: center; justify-content: center; gap: 0.5rem; margin-top: 1.5rem; }
.map-frame { width: 100%; height: 16rem; border: 0; border-radius: 0.375rem; }
.map-placeholder { height: 16rem; display: flex; align-items: center; justify-content: center; background: #e5e7eb; border-radius: 0.375rem; color: #6b7280; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " — Nairobi Realty" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header class="site" {
                    div {
                        h3 { "Nairobi Realty" }
                        p class="muted" { "Fast, searchable property listings." }
                    }
                    nav {
                        a href="/" { "Home" }
                    }
                }
                (content)
            }
        }
    }
}

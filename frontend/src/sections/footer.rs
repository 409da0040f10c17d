use chrono::Datelike;
use yew::prelude::*;

use crate::content::PRODUCT_NAME;
use crate::viewport::Layout;

pub fn copyright(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, PRODUCT_NAME)
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub layout: Layout,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class={classes!("site-footer", props.layout.is_mobile().then(|| "mobile"))}>
            <style>
                {r#"
                    .site-footer {
                        background: var(--color-gray-100, #f7fafc);
                        padding: 2rem 1rem;
                        margin-top: 4rem;
                        text-align: center;
                        font-size: 0.875rem;
                        color: var(--color-text-secondary, #4a5568);
                    }
                    .site-footer.mobile { padding: 1.5rem 1rem; margin-top: 2rem; font-size: 0.75rem; }
                "#}
            </style>
            { copyright(year) }
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_product() {
        assert_eq!(copyright(2025), "© 2025 OrgLookup. All rights reserved.");
    }
}

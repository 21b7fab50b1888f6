/// Search restriction to the national agricultural research sites.
const OFFICIAL_SITES: &str = "+site%3Aicar.org.in+OR+site%3Atnau.ac.in";

const SEARCH_BASE: &str = "https://www.google.com/search?q=";

/// Build a search link restricted to official research sources.
/// Spaces become `+`; nothing else is escaped.
pub fn official_resource_link(query: &str) -> String {
    format!("{SEARCH_BASE}{}{OFFICIAL_SITES}", query.trim().replace(' ', "+"))
}

/// Markdown footer linking an answer to its official source.
pub fn resource_footer(title: &str, link_text: &str, link: &str) -> String {
    format!("\n\n**{title}:** [{link_text}]({link})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_become_plus() {
        assert_eq!(
            official_resource_link("Paddy Blast identification treatment Extreme"),
            "https://www.google.com/search?q=Paddy+Blast+identification+treatment+Extreme\
             +site%3Aicar.org.in+OR+site%3Atnau.ac.in"
        );
    }

    #[test]
    fn footer_is_markdown_link() {
        assert_eq!(
            resource_footer("OFFICIAL SOURCE", "Research", "https://x"),
            "\n\n**OFFICIAL SOURCE:** [Research](https://x)"
        );
    }
}

//! HTML rendering for the four pages.
//!
//! Every page is a pure function from its inputs to a complete document:
//! page content wrapped in [`layout`], which sets the title. Claim names and
//! values pass through [`escape`]; static markup is emitted as written.

use crate::auth::types::Claim;

/// Wrap page content in the shared master layout.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{}</title></head>\n\
         <body>\n{}\n</body>\n\
         </html>\n",
        escape(title),
        body
    )
}

pub fn home_page() -> String {
    layout(
        "Home",
        "<h1>claimview</h1>\n\
         <p>Sign in with Google and see the identity claims it hands back.</p>\n\
         <p><a href=\"/user\">Your claims</a> &middot; <a href=\"/login\">Sign in</a></p>",
    )
}

pub fn login_page() -> String {
    layout(
        "Sign in",
        "<h1>Sign in</h1>\n\
         <ul class=\"providers\">\n\
         <li><a href=\"/google-auth\">Sign in with Google</a></li>\n\
         <li><a class=\"disabled\">Sign in with Facebook</a></li>\n\
         <li><a class=\"disabled\">Sign in with Microsoft</a></li>\n\
         </ul>",
    )
}

/// Profile page: one list item per claim, in the order the provider gave them.
pub fn user_page(claims: &[Claim]) -> String {
    let items: String = claims
        .iter()
        .map(|c| format!("<li>{}: {}</li>\n", escape(&c.name), escape(&c.value)))
        .collect();
    layout(
        "Your claims",
        &format!(
            "<h1>Your claims</h1>\n<ul class=\"claims\">\n{items}</ul>\n\
             <p><a href=\"/logout\">Sign out</a></p>"
        ),
    )
}

pub fn not_found_page() -> String {
    layout(
        "Not found",
        "<h1>Page not found</h1>\n<p><a href=\"/\">Back to the home page</a></p>",
    )
}

/// Escape text for safe interpolation into HTML.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_replaces_html_significant_characters() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(
            escape(r#""quoted" 'apos'"#),
            "&quot;quoted&quot; &#39;apos&#39;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn user_page_lists_claims_in_order() {
        let claims = vec![
            Claim::new("name", "Alice"),
            Claim::new("email", "a@example.com"),
        ];
        let page = user_page(&claims);
        let name = page.find("<li>name: Alice</li>").expect("name item");
        let email = page
            .find("<li>email: a@example.com</li>")
            .expect("email item");
        assert!(name < email);
    }

    #[test]
    fn user_page_escapes_claim_values() {
        let page = user_page(&[Claim::new("name", "<script>")]);
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn pages_are_complete_documents() {
        for page in [home_page(), login_page(), not_found_page(), user_page(&[])] {
            assert!(page.starts_with("<!DOCTYPE html>"));
            assert!(page.contains("</html>"));
        }
    }

    #[test]
    fn login_page_links_to_the_google_challenge() {
        assert!(login_page().contains("href=\"/google-auth\""));
    }
}

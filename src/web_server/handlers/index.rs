//! User list page.

use std::fmt::Write;

use axum::{extract::State, response::Html};

use super::super::error::WebError;
use super::super::types::AppState;
use crate::export::ExportFormat;
use crate::storage::UserRecord;
use strum::IntoEnumIterator;

/// Lists every stored user with a form for adding more.
pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let users = state.store.get_users().await?;
    Ok(Html(render_index(&users)))
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub(crate) fn render_index(users: &[UserRecord]) -> String {
    let mut rows = String::new();
    for user in users {
        // Writing into a String cannot fail.
        let _ = writeln!(
            rows,
            "      <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            user.id,
            escape_html(&user.name),
            escape_html(&user.email)
        );
    }

    let links: Vec<String> = ExportFormat::iter()
        .map(|f| {
            format!(
                "<a href=\"/export/{ext}\">{label}</a>",
                ext = f.extension(),
                label = f.extension().to_uppercase()
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Users</title>
</head>
<body>
  <h1>Users</h1>
  <form action="/add" method="post">
    <input type="text" name="name" placeholder="Name" required>
    <input type="email" name="email" placeholder="Email" required>
    <button type="submit">Add user</button>
  </form>
  <table>
    <thead>
      <tr><th>ID</th><th>Name</th><th>Email</th></tr>
    </thead>
    <tbody>
{rows}    </tbody>
  </table>
  <p>Export: {links}</p>
</body>
</html>
"#,
        rows = rows,
        links = links.join(" | ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_users_in_order() {
        let html = render_index(&[
            UserRecord::new(1, "Ann", "a@x.com"),
            UserRecord::new(2, "Bob", "b@x.com"),
        ]);
        let ann = html.find("<td>Ann</td>").expect("Ann listed");
        let bob = html.find("<td>Bob</td>").expect("Bob listed");
        assert!(ann < bob);
        assert!(html.contains("<td>a@x.com</td>"));
    }

    #[test]
    fn test_render_escapes_markup() {
        let html = render_index(&[UserRecord::new(1, "<script>alert('x')</script>", "a&b@x.com")]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"));
        assert!(html.contains("a&amp;b@x.com"));
    }

    #[test]
    fn test_render_links_every_export_format() {
        let html = render_index(&[]);
        assert!(html.contains("href=\"/export/csv\""));
        assert!(html.contains("href=\"/export/json\""));
        assert!(html.contains("href=\"/export/pdf\""));
        assert!(html.contains("action=\"/add\""));
    }
}

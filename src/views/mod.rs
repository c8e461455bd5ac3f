//! Server-rendered HTML. Small enough that plain string building beats a
//! template engine; every page goes through `layout` and all interpolated
//! user/database text goes through `escape`.

pub mod pages;

/// Escape text for interpolation into HTML body or attribute positions.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} | TutorHub</title>
</head>
<body>
  <header>
    <nav>
      <a href="/">TutorHub</a>
      <a href="/request/">Leave a request</a>
    </nav>
  </header>
  <main>
{body}
  </main>
  <footer>TutorHub — find your English teacher</footer>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<b onclick="x('&')">"#),
            "&lt;b onclick=&quot;x(&#39;&amp;&#39;)&quot;&gt;"
        );
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn layout_escapes_the_title() {
        let page = layout("<script>", "<p>ok</p>");
        assert!(page.contains("&lt;script&gt; | TutorHub"));
        assert!(page.contains("<p>ok</p>"));
    }
}

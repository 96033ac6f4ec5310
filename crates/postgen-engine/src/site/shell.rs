//! Static HTML shells wrapped around converted posts and the index.

use html_escape::{encode_double_quoted_attribute, encode_text};
use postgen_config::{IndexConfig, PageConfig};

/// Shared `<head>` for posts and the index.
fn head(language: &str, title: &str, font_stylesheet: &str, stylesheet: &str) -> String {
    format!(
        "<!doctype html>
<html>
<head>
<meta charset='UTF-8'><meta name='viewport' content='width=device-width initial-scale=1'>
<meta http-equiv=\"content-language\" content=\"{language}\">
<title>{title}</title>
<link href='{font_stylesheet}' rel='stylesheet' type='text/css' />
<link rel=\"stylesheet\" href=\"{stylesheet}\">
</head>",
        title = encode_text(title),
    )
}

fn nav(profile_href: &str, posts_href: &str) -> String {
    format!(
        "  <nav class=\"nav-bar\">
    <a href=\"{profile_href}\" class=\"nav-link\">Profile</a>
    <a href=\"{posts_href}\" class=\"nav-link\">Posts</a>
  </nav>"
    )
}

/// Wraps a converted body in the post page shell, titled `title`.
pub fn render_page(page: &PageConfig, title: &str, body: &str) -> String {
    format!(
        "{head}
<body class='typora-export'>
<div id='write' class='is-mac'>
{nav}

{body}

</div>
</body>
</html>
",
        head = head(&page.language, title, &page.font_stylesheet, &page.stylesheet),
        nav = nav(&page.profile_href, &page.posts_href),
    )
}

/// Renders the posts index.
///
/// `posts` are file names inside the output directory and `link_prefix` is
/// that directory relative to the index page (e.g. `./html`).
pub fn render_index(
    index: &IndexConfig,
    posts: &[String],
    link_prefix: &str,
    last_update: &str,
) -> String {
    let items = if posts.is_empty() {
        format!("    <!-- No posts found in {link_prefix} -->")
    } else {
        posts
            .iter()
            .map(|name| {
                format!(
                    "    <li><a href=\"{href}\">{label}</a></li>",
                    href = encode_double_quoted_attribute(&format!("{link_prefix}/{name}")),
                    label = encode_text(name),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "{head}
<body class='typora-export'>
<div id='write' class='is-mac'>
{nav}

  <h3>{title}</h3>
  <ul>
{items}
  </ul>

  <footer>Last update: {last_update}</footer>
</div>
</body>
</html>
",
        head = head(
            &index.language,
            &index.title,
            &index.font_stylesheet,
            &index.stylesheet
        ),
        nav = nav(&index.profile_href, &index.posts_href),
        title = encode_text(&index.title),
    )
}

use crate::bookmark::BookmarkNode;

pub const NETSCAPE_PREAMBLE: &str = "<!DOCTYPE NETSCAPE-Bookmark-file-1>
<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
<DL><p>";

const NETSCAPE_EPILOGUE: &str = "\n</DL><p>";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Escape `&<>"'` in titles and urls.
    ///
    /// Off by default, text is written verbatim so the output can be diffed
    /// against other exporters. A title containing markup leaks into the
    /// document.
    pub escape: bool,
}

/// Render the tree as a Netscape bookmark file, nodes at depth 1 are the
/// roots.
pub fn bookmarks_to_html(roots: &[BookmarkNode], options: HtmlOptions) -> String {
    let mut output = String::from(NETSCAPE_PREAMBLE);
    write_nodes(&mut output, roots, 1, options);
    output.push_str(NETSCAPE_EPILOGUE);
    output
}

fn write_nodes(
    output: &mut String,
    nodes: &[BookmarkNode],
    depth: usize,
    options: HtmlOptions,
) {
    for node in nodes {
        match node {
            BookmarkNode::Folder { title, children } => {
                new_line(output, depth);
                output.push_str("<DT><H3>");
                push_text(output, title, options);
                output.push_str("</H3>");
                new_line(output, depth);
                output.push_str("<DL><p>");
                write_nodes(output, children, depth + 1, options);
                new_line(output, depth);
                output.push_str("</DL><p>");
            }
            BookmarkNode::Bookmark { title, url } => {
                new_line(output, depth);
                output.push_str("<DT><A HREF=\"");
                push_text(output, url, options);
                output.push_str("\">");
                push_text(output, title, options);
                output.push_str("</A>");
            }
        }
    }
}

fn new_line(output: &mut String, depth: usize) {
    output.push('\n');
    output.extend(std::iter::repeat('\t').take(depth));
}

fn push_text(output: &mut String, text: &str, options: HtmlOptions) {
    if !options.escape {
        output.push_str(text);
        return;
    }
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            c => output.push(c),
        }
    }
}

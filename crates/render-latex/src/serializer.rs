use vitae_render_core::{BackendKind, FragmentSerializer};

/// Serializes fragments to LaTeX markup.
///
/// Backslashes are left alone so authors can embed commands in their text;
/// only the characters that break compilation in running prose are escaped.
/// Inline math between unescaped `$` signs is written verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatexSerializer;

impl FragmentSerializer for LatexSerializer {
    fn kind(&self) -> BackendKind {
        BackendKind::Latex
    }

    fn text(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut in_math = false;
        let mut escaped = false;
        for c in text.chars() {
            match c {
                '$' if !escaped => {
                    in_math = !in_math;
                    out.push(c);
                }
                '&' | '%' | '#' | '_' if !in_math => {
                    out.push('\\');
                    out.push(c);
                }
                _ => out.push(c),
            }
            escaped = c == '\\' && !escaped;
        }
        out
    }

    fn strong(&self, inner: &str) -> String {
        format!("\\textbf{{{}}}", inner)
    }

    fn emphasis(&self, inner: &str) -> String {
        format!("\\emph{{{}}}", inner)
    }

    fn link(&self, href: &str, inner: &str) -> String {
        format!("\\href{{{}}}{{{}}}", href, inner)
    }

    fn line_break(&self) -> String {
        "\\\\\n".to_string()
    }

    fn paragraph(&self, inner: &str, only_block: bool) -> String {
        if only_block {
            inner.to_string()
        } else {
            format!("{{{}}}", inner)
        }
    }

    fn list(&self, ordered: bool, items: &[String]) -> String {
        let environment = if ordered { "enumerate" } else { "itemize" };
        let mut out = format!("\\begin{{{}}}\n", environment);
        for item in items {
            out.push_str("\\item ");
            out.push_str(item);
            out.push('\n');
        }
        out.push_str(&format!("\\end{{{}}}", environment));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_types::Fragment;

    #[test]
    fn test_single_paragraph_is_bare() {
        let out = LatexSerializer.serialize(&Fragment::new("Hello **world**"));
        assert_eq!(out, "Hello \\textbf{world}");
    }

    #[test]
    fn test_emphasis_and_link() {
        let out = LatexSerializer.serialize(&Fragment::new("*see* [site](https://a.b)"));
        assert_eq!(out, "\\emph{see} \\href{https://a.b}{site}");
    }

    #[test]
    fn test_blocks_are_grouped() {
        let out = LatexSerializer.serialize(&Fragment::new("First.\n\n- a\n- b\n\nLast."));
        assert_eq!(
            out,
            "{First.}\n\\begin{itemize}\n\\item a\n\\item b\n\\end{itemize}\n{Last.}"
        );
    }

    #[test]
    fn test_ordered_list_uses_enumerate() {
        let out = LatexSerializer.serialize(&Fragment::new("1. a\n2. b"));
        assert_eq!(out, "\\begin{enumerate}\n\\item a\n\\item b\n\\end{enumerate}");
    }

    #[test]
    fn test_special_characters_are_escaped() {
        let out = LatexSerializer.serialize(&Fragment::new("R&D at 100% on snake_case"));
        assert_eq!(out, "R\\&D at 100\\% on snake\\_case");
    }

    #[test]
    fn test_inline_math_is_verbatim() {
        let out = LatexSerializer.serialize(&Fragment::new("Cost $x_1 + y_2$ at 100% for snake_case"));
        assert_eq!(out, "Cost $x_1 + y_2$ at 100\\% for snake\\_case");
    }

    #[test]
    fn test_escaped_dollar_does_not_open_math() {
        let out = LatexSerializer.serialize(&Fragment::new("Price \\\\$5 for a_b"));
        assert_eq!(out, "Price \\$5 for a\\_b");
    }

    #[test]
    fn test_absent_fragment_is_empty() {
        assert_eq!(LatexSerializer.serialize(&Fragment::absent()), "");
        assert_eq!(LatexSerializer.serialize(&Fragment::new("   ")), "");
    }
}

//! CSS scope attribute insertion
//!
//! When the project assigns a document a CSS isolation scope, every visible
//! element in its markup gets the scope identifier as an attribute so the
//! scoped stylesheet can select it. Applies to view and page documents only.
//! Elements that never render user-visible content (`head`, `meta`, `title`,
//! `link`, `base`, `script`, `style`, `html`) are left unscoped.

use weft_core::CodeDocument;
use weft_core::ir::IrNodeKind;

use crate::pipeline::Pass;

/// Elements the scope attribute must not be attached to
const UNSCOPED_ELEMENTS: &[&str] = &[
    "head", "meta", "title", "link", "base", "script", "style", "html",
];

pub struct CssScopePass;

impl Pass for CssScopePass {
    fn name(&self) -> &'static str {
        "CssScopePass"
    }

    fn order(&self) -> i32 {
        100
    }

    fn execute(&self, document: &mut CodeDocument) {
        let Some(scope) = document.options.css_scope.clone() else {
            return;
        };
        if !document.document_kind().supports_css_scope() {
            tracing::trace!(kind = ?document.document_kind(), "document kind is not scopable");
            return;
        }

        let references = document
            .ir
            .collect(|node| matches!(node.kind, IrNodeKind::Html(_)));
        for reference in references {
            if let IrNodeKind::Html(html) = &mut document.ir.node_mut(reference.id).kind {
                html.content = apply_scope(&html.content, &scope);
            }
        }
    }
}

/// Insert ` {scope}` after the tag name of every scopable opening tag
///
/// Re-applying the same scope is a no-op, so the pass can run again on an
/// already-scoped tree without stacking attributes.
fn apply_scope(content: &str, scope: &str) -> String {
    let mut result = String::with_capacity(content.len() + scope.len() * 4);
    let mut rest = content;

    while let Some(open) = rest.find('<') {
        let (before, tag) = rest.split_at(open);
        result.push_str(before);

        let name_start = &tag[1..];
        let Some(first) = name_start.chars().next() else {
            result.push_str(tag);
            break;
        };
        // Closing tags, comments, doctypes, and processing instructions
        // never receive the scope.
        if !first.is_ascii_alphabetic() {
            result.push('<');
            rest = name_start;
            continue;
        }

        let name_len = name_start
            .find(|ch: char| !ch.is_ascii_alphanumeric() && ch != '-')
            .unwrap_or(name_start.len());
        let (name, after_name) = name_start.split_at(name_len);
        // An opening tag name ends in whitespace, `/`, `>`, or the end of
        // the run; anything else is literal text such as `a<b`.
        let terminated = after_name
            .chars()
            .next()
            .is_none_or(|ch| ch.is_whitespace() || ch == '>' || ch == '/');
        if !terminated {
            result.push('<');
            rest = name_start;
            continue;
        }

        result.push('<');
        result.push_str(name);
        if is_scopable(name) && !already_scoped(after_name, scope) {
            result.push(' ');
            result.push_str(scope);
        }
        rest = after_name;
    }
    result.push_str(rest);
    result
}

fn is_scopable(name: &str) -> bool {
    !UNSCOPED_ELEMENTS
        .iter()
        .any(|unscoped| name.eq_ignore_ascii_case(unscoped))
}

fn already_scoped(after_name: &str, scope: &str) -> bool {
    after_name
        .strip_prefix(' ')
        .is_some_and(|rest| rest.starts_with(scope))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::tests::markup_document;
    use weft_core::DocumentKind;

    fn html_contents(document: &CodeDocument) -> Vec<String> {
        document
            .ir
            .collect(|node| matches!(node.kind, IrNodeKind::Html(_)))
            .into_iter()
            .map(|reference| match &document.ir.node(reference.id).kind {
                IrNodeKind::Html(html) => html.content.clone(),
                _ => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn visible_elements_receive_the_scope() {
        let mut document = markup_document("<div><span>hi</span></div>");
        document.options.css_scope = Some("w-scope-1a2b".into());
        CssScopePass.execute(&mut document);
        assert_eq!(
            html_contents(&document),
            ["<div w-scope-1a2b><span w-scope-1a2b>hi</span></div>"]
        );
    }

    #[test]
    fn skip_list_elements_are_left_unscoped() {
        let mut document = markup_document("<div></div><script>x</script><head></head>");
        document.options.css_scope = Some("w-scope".into());
        CssScopePass.execute(&mut document);
        assert_eq!(
            html_contents(&document),
            ["<div w-scope></div><script>x</script><head></head>"]
        );
    }

    #[test]
    fn self_closing_and_attributed_tags_are_handled() {
        let mut document = markup_document(r#"<img src="a.png"/><br/>"#);
        document.options.css_scope = Some("w-scope".into());
        CssScopePass.execute(&mut document);
        assert_eq!(
            html_contents(&document),
            [r#"<img w-scope src="a.png"/><br w-scope/>"#]
        );
    }

    #[test]
    fn comments_and_doctypes_are_untouched(){
        let mut document = markup_document("<!-- note --><!DOCTYPE html>");
        document.options.css_scope = Some("w-scope".into());
        CssScopePass.execute(&mut document);
        assert_eq!(html_contents(&document), ["<!-- note --><!DOCTYPE html>"]);
    }

    #[test]
    fn literal_less_than_in_text_is_not_a_tag() {
        let mut document = markup_document("<pre>if (a<b) { render(); }</pre>");
        document.options.css_scope = Some("w-scope".into());
        CssScopePass.execute(&mut document);
        assert_eq!(
            html_contents(&document),
            ["<pre w-scope>if (a<b) { render(); }</pre>"]
        );
    }

    #[test]
    fn component_documents_are_not_scoped() {
        let mut document = markup_document("<div></div>");
        document.options.document_kind = DocumentKind::Component;
        document.options.css_scope = Some("w-scope".into());
        CssScopePass.execute(&mut document);
        assert_eq!(html_contents(&document), ["<div></div>"]);
    }

    #[test]
    fn without_a_scope_nothing_changes() {
        let mut document = markup_document("<div></div>");
        CssScopePass.execute(&mut document);
        assert_eq!(html_contents(&document), ["<div></div>"]);
    }

    #[test]
    fn rescoping_is_a_no_op() {
        let mut document = markup_document("<div></div>");
        document.options.css_scope = Some("w-scope".into());
        CssScopePass.execute(&mut document);
        CssScopePass.execute(&mut document);
        assert_eq!(html_contents(&document), ["<div w-scope></div>"]);
    }
}

//! Positional patching of a mounted tree.
//!
//! Both trees are flattened to their element descendants in document order
//! and walked pairwise by index. There is no realignment: when the candidate
//! has more or fewer elements than the live tree, pairs past the shorter list
//! are left alone and pairs after an insertion compare the wrong elements.
//! Callers rely on views keeping their element structure stable between renders.

use crate::error::Result;
use crate::node::NodeId;
use crate::renderer::DisplayTree;
use tracing::{debug, trace};

/// What one `update` pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchReport {
    /// Index pairs walked.
    pub compared: usize,
    /// Pairs that were already node-equal.
    pub unchanged: usize,
    pub text_patches: usize,
    /// Attribute writes, one per copied attribute.
    pub attribute_writes: usize,
    /// Live elements dropped by an earlier text patch in the same pass.
    pub detached: usize,
    /// Candidate elements with no live counterpart.
    pub unmatched_candidates: usize,
    /// Live elements with no candidate counterpart.
    pub unmatched_current: usize,
}

impl PatchReport {
    pub fn is_noop(&self) -> bool {
        self.text_patches == 0 && self.attribute_writes == 0
    }
}

/// Patch the element descendants of `current_root` towards those of `candidate_root`.
pub fn reconcile<T>(tree: &mut T, candidate_root: NodeId, current_root: NodeId) -> Result<PatchReport>
where
    T: DisplayTree + ?Sized,
{
    let candidates = tree.descendant_elements(candidate_root)?;
    let current = tree.descendant_elements(current_root)?;

    let mut report = PatchReport {
        unmatched_candidates: candidates.len().saturating_sub(current.len()),
        unmatched_current: current.len().saturating_sub(candidates.len()),
        ..PatchReport::default()
    };
    if candidates.len() != current.len() {
        debug!(
            candidates = candidates.len(),
            current = current.len(),
            "element count changed, patching the common prefix only"
        );
    }

    for (&new_el, &cur_el) in candidates.iter().zip(current.iter()) {
        report.compared += 1;

        if !tree.contains(cur_el) {
            report.detached += 1;
            continue;
        }
        if tree.is_equal_node(new_el, cur_el) {
            report.unchanged += 1;
            continue;
        }

        if has_own_text(tree, new_el) {
            let text = tree.text_content(new_el)?;
            trace!(?cur_el, %text, "text patch");
            tree.set_text_content(cur_el, &text)?;
            report.text_patches += 1;
        }

        if !tree.is_equal_node(new_el, cur_el) {
            for (name, value) in tree.attributes(new_el)? {
                tree.set_attribute(cur_el, &name, &value)?;
                report.attribute_writes += 1;
            }
        }
    }

    debug!(?report, "update applied");
    Ok(report)
}

/// Only elements whose first child is non-blank text get their text replaced.
/// Containers start with layout whitespace or an element and are skipped, so
/// their children survive.
fn has_own_text<T: DisplayTree + ?Sized>(tree: &T, node: NodeId) -> bool {
    tree.first_child_value(node)
        .map(|value| !value.trim().is_empty())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::DomMutation;
    use crate::renderer::MemoryDocument;

    fn patch(current: &str, candidate: &str) -> (MemoryDocument, NodeId, PatchReport) {
        let mut doc = MemoryDocument::from_markup(&format!("<section>{current}</section>"))
            .unwrap()
            .with_recording();
        let root = doc.arena().children(doc.body())[0];
        let fragment = doc.parse_fragment(candidate).unwrap();
        let report = reconcile(&mut doc, fragment, root).unwrap();
        doc.release(fragment);
        (doc, root, report)
    }

    #[test]
    fn test_identical_trees_are_untouched() {
        let markup = r#"<div class="recipe"><h2>Pasta</h2><span data-servings="4">4</span></div>"#;
        let (doc, _, report) = patch(markup, markup);
        assert_eq!(report.compared, 3);
        assert_eq!(report.unchanged, 3);
        assert!(report.is_noop());
        assert!(doc.mutations().is_empty());
    }

    #[test]
    fn test_changed_leaf_text_is_replaced() {
        let (doc, root, report) = patch(
            r#"<div class="recipe"><span class="servings">4</span></div>"#,
            r#"<div class="recipe"><span class="servings">5</span></div>"#,
        );
        assert_eq!(doc.inner_html_of(root), r#"<div class="recipe"><span class="servings">5</span></div>"#);
        assert_eq!(report.text_patches, 1);
    }

    #[test]
    fn test_whitespace_first_child_blocks_text_patch() {
        let (doc, root, report) = patch(
            "<div>\n  <p>old</p>\n</div>",
            "<div>\n  <p>new</p>\n  <em>extra</em>\n</div>",
        );
        // The container keeps its children; only the paired <p> is rewritten.
        assert_eq!(doc.inner_html_of(root), "<div>\n  <p>new</p>\n</div>");
        assert_eq!(report.text_patches, 1);
        assert_eq!(report.unmatched_candidates, 1);
    }

    #[test]
    fn test_element_first_child_blocks_text_patch() {
        let (doc, root, _) = patch("<div><b>a</b>tail</div>", "<div><b>a</b>other</div>");
        assert_eq!(doc.inner_html_of(root), "<div><b>a</b>tail</div>");
    }

    #[test]
    fn test_later_text_child_is_never_patched() {
        let (doc, root, report) = patch("<p> <i>x</i> old</p>", "<p> <i>x</i> new</p>");
        assert_eq!(doc.inner_html_of(root), "<p> <i>x</i> old</p>");
        assert_eq!(report.text_patches, 0);
    }

    #[test]
    fn test_attributes_are_added_and_overwritten_never_removed() {
        let (doc, root, report) = patch(
            r#"<a class="preview__link" href="  " data-keep="1"> </a>"#,
            r##"<a class="preview__link preview__link--active" href="#5ed6604591c37cdc054bc886"> </a>"##,
        );
        assert_eq!(
            doc.inner_html_of(root),
            r##"<a class="preview__link preview__link--active" href="#5ed6604591c37cdc054bc886" data-keep="1"> </a>"##
        );
        assert_eq!(report.attribute_writes, 2);
        assert_eq!(report.text_patches, 0);
    }

    #[test]
    fn test_text_patch_that_equalizes_skips_attributes() {
        let (doc, _, report) = patch(r#"<span id="a">1</span>"#, r#"<span id="a">2</span>"#);
        assert_eq!(report.text_patches, 1);
        assert_eq!(report.attribute_writes, 0);
        assert_eq!(
            doc.mutations().last(),
            Some(&DomMutation::SetText {
                node: doc.arena().children(doc.arena().children(doc.body())[0])[0],
                value: "2".into()
            })
        );
    }

    #[test]
    fn test_misaligned_trees_patch_by_position() {
        // An inserted <li> shifts every pair after it; nothing realigns.
        let (doc, root, report) = patch(
            "<ul><li>a</li><li>b</li></ul>",
            "<ul><li>new</li><li>a</li><li>b</li></ul>",
        );
        assert_eq!(doc.inner_html_of(root), "<ul><li>new</li><li>a</li></ul>");
        assert_eq!(report.unmatched_candidates, 1);
    }

    #[test]
    fn test_text_patch_on_mixed_content_detaches_descendants() {
        let (doc, root, report) = patch(
            "<p>Hello <b>world</b></p>",
            "<p>Bye <b>moon</b></p>",
        );
        assert_eq!(doc.inner_html_of(root), "<p>Bye moon</p>");
        assert_eq!(report.text_patches, 1);
        assert_eq!(report.detached, 1);
    }
}

use hookbook_core::*;

/// Hit region addressed by `target`: an exact test tag wins, then the first
/// region whose label (button text or field hint) matches.
pub(crate) fn hit_by_target<'a>(frame: &'a Frame, target: &str) -> Option<&'a HitRegion> {
    frame
        .hit_regions
        .iter()
        .find(|h| h.test_tag.as_deref() == Some(target))
        .or_else(|| frame.hit_regions.iter().find(|h| h.label == target))
}

/// Text currently held by a text field view, controlled or not.
pub(crate) fn field_text(v: &View) -> String {
    match &v.kind {
        ViewKind::TextField {
            value: Some(value), ..
        } => value.clone(),
        ViewKind::TextField { value: None, .. } => v
            .modifier
            .node_ref
            .as_ref()
            .map(NodeRef::value)
            .unwrap_or_default(),
        _ => v.text_content(),
    }
}

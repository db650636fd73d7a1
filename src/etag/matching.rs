use super::tag::*;

/// Compare a client validator (from `If-None-Match`) with the entity tag we computed.
///
/// No client validator is never a match.
///
/// With `weak` comparison the weak marker is ignored on both sides. With strong comparison both
/// validators must be strong *and* identical; a weak validator never satisfies strong comparison.
///
/// Values are compared as is. Lists, `*`, and malformed values are simply not matched.
pub fn entity_tags_match(
    weak: bool,
    client_validator: Option<&str>,
    entity_tag: &EntityTag,
) -> bool {
    let Some(client_validator) = client_validator else {
        return false;
    };

    if weak {
        strip_weak(client_validator) == entity_tag.opaque()
    } else {
        !is_weak(client_validator)
            && !entity_tag.is_weak()
            && (client_validator == entity_tag.as_str())
    }
}

use thiserror::Error;

/// Maximum author length in characters, counted after trimming.
/// Shared with the form markup (`maxlength`) and the character counter.
pub const MAX_AUTHOR_LEN: usize = 100;

/// Maximum comment length in characters, counted after trimming.
pub const MAX_BODY_LEN: usize = 500;

/// A single violated input rule with its user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Invalidity {
    #[error("El nombre es obligatorio")]
    MissingAuthor,
    #[error("El nombre no puede exceder {} caracteres", MAX_AUTHOR_LEN)]
    AuthorTooLong,
    #[error("El comentario es obligatorio")]
    MissingBody,
    #[error("El comentario no puede exceder {} caracteres", MAX_BODY_LEN)]
    BodyTooLong,
}

/// Checks the *trimmed, unescaped* input and returns every violated rule
/// in check order. An empty result means the input is valid.
///
/// Lengths are counted in user-visible characters, not in bytes and not
/// in escaped-entity expansions.
pub fn validate_new_comment(author: &str, body: &str) -> Vec<Invalidity> {
    let author = author.trim();
    let body = body.trim();
    let mut invalidities = Vec::new();
    if author.is_empty() {
        invalidities.push(Invalidity::MissingAuthor);
    } else if author.chars().count() > MAX_AUTHOR_LEN {
        invalidities.push(Invalidity::AuthorTooLong);
    }
    if body.is_empty() {
        invalidities.push(Invalidity::MissingBody);
    } else if body.chars().count() > MAX_BODY_LEN {
        invalidities.push(Invalidity::BodyTooLong);
    }
    invalidities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_input_within_bounds() {
        assert!(validate_new_comment("Ana", "Hola mundo").is_empty());
        assert!(validate_new_comment(&"a".repeat(MAX_AUTHOR_LEN), &"b".repeat(MAX_BODY_LEN))
            .is_empty());
    }

    #[test]
    fn reject_empty_fields() {
        assert_eq!(
            validate_new_comment("", "Hola"),
            vec![Invalidity::MissingAuthor]
        );
        assert_eq!(
            validate_new_comment("Ana", "   "),
            vec![Invalidity::MissingBody]
        );
    }

    #[test]
    fn reject_overlong_fields() {
        assert_eq!(
            validate_new_comment(&"a".repeat(MAX_AUTHOR_LEN + 1), "Hola"),
            vec![Invalidity::AuthorTooLong]
        );
        assert_eq!(
            validate_new_comment("Ana", &"b".repeat(MAX_BODY_LEN + 1)),
            vec![Invalidity::BodyTooLong]
        );
    }

    #[test]
    fn all_errors_in_check_order() {
        assert_eq!(
            validate_new_comment("", &"b".repeat(MAX_BODY_LEN + 1)),
            vec![Invalidity::MissingAuthor, Invalidity::BodyTooLong]
        );
        assert_eq!(
            validate_new_comment("", ""),
            vec![Invalidity::MissingAuthor, Invalidity::MissingBody]
        );
    }

    #[test]
    fn count_characters_not_bytes() {
        // 100 accented characters are 200 bytes but still within bounds.
        assert!(validate_new_comment(&"á".repeat(MAX_AUTHOR_LEN), "Hola").is_empty());
    }

    #[test]
    fn trim_before_counting() {
        let padded = format!("   {}   ", "a".repeat(MAX_AUTHOR_LEN));
        assert!(validate_new_comment(&padded, "Hola").is_empty());
    }

    #[test]
    fn messages_match_the_form() {
        assert_eq!(
            Invalidity::MissingAuthor.to_string(),
            "El nombre es obligatorio"
        );
        assert_eq!(
            Invalidity::AuthorTooLong.to_string(),
            "El nombre no puede exceder 100 caracteres"
        );
        assert_eq!(
            Invalidity::MissingBody.to_string(),
            "El comentario es obligatorio"
        );
        assert_eq!(
            Invalidity::BodyTooLong.to_string(),
            "El comentario no puede exceder 500 caracteres"
        );
    }
}

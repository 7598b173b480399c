use thiserror::Error;

use crate::{repositories, util::validate::Invalidity};

#[derive(Debug, Error)]
pub enum Error {
    /// Every violated input rule, in check order. The display
    /// representation joins the messages the way the form shows them.
    #[error("{}", join_messages(.0))]
    Invalid(Vec<Invalidity>),
    #[error("Ya se está enviando un comentario")]
    SubmissionInFlight,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

fn join_messages(invalidities: &[Invalidity]) -> String {
    invalidities
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(". ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_all_messages() {
        let err = Error::Invalid(vec![Invalidity::MissingAuthor, Invalidity::MissingBody]);
        assert_eq!(
            err.to_string(),
            "El nombre es obligatorio. El comentario es obligatorio"
        );
    }
}

use maud::{html, Markup, DOCTYPE};

use crate::web::STORE_DOWN_MESSAGE;
use opina_core::{
    entities::*,
    util::{
        time_format,
        validate::{MAX_AUTHOR_LEN, MAX_BODY_LEN},
    },
};

pub enum Notice {
    Success(String),
    Error(String),
}

#[derive(Default)]
pub struct FormValues {
    pub author: String,
    pub body: String,
}

pub enum Listing {
    Loaded(Vec<Comment>),
    Unavailable,
}

pub fn index(
    notice: Option<Notice>,
    form: &FormValues,
    listing: Listing,
    now: Timestamp,
    auto_refresh_secs: u64,
) -> Markup {
    page(
        "Libro de comentarios",
        auto_refresh_secs,
        html! {
            header {
                h1 { "Su opinión es importante" }
                p { "Déjenos su comentario" }
            }
            (notice_banner(notice))
            (comment_form(form))
            (comment_listing(listing, now))
        },
    )
}

fn page(title: &str, auto_refresh_secs: u64, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href="/main.css";
            }
            body data-auto-refresh=(auto_refresh_secs) {
                (content)
                script src="/main.js" {}
            }
        }
    }
}

fn notice_banner(notice: Option<Notice>) -> Markup {
    html! {
        @if let Some(notice) = notice {
            @match notice {
                Notice::Success(msg) => { div class="notice success" { (msg) } }
                Notice::Error(msg) => { div class="notice error" { (msg) } }
            }
        }
    }
}

fn comment_form(form: &FormValues) -> Markup {
    html! {
        form id="comment-form" action="/comentarios" method="POST" {
            label for="nombre" { "Nombre" }
            input
                id="nombre"
                name="nombre"
                type="text"
                value=(form.author)
                maxlength=(MAX_AUTHOR_LEN)
                required;
            label for="comentario" { "Comentario" }
            textarea
                id="comentario"
                name="comentario"
                maxlength=(MAX_BODY_LEN)
                rows="4"
                required { (form.body) }
            div class="counter" {
                span id="char-counter" {
                    (format!("{}/{}", form.body.chars().count(), MAX_BODY_LEN))
                }
            }
            button id="submit-button" type="submit" { "Enviar comentario" }
        }
    }
}

fn comment_listing(listing: Listing, now: Timestamp) -> Markup {
    html! {
        section id="comments" {
            h2 { "Comentarios" }
            @match listing {
                Listing::Unavailable => {
                    div class="store-down" {
                        p { (STORE_DOWN_MESSAGE) }
                        a href="/" { "Reintentar" }
                    }
                }
                Listing::Loaded(comments) => {
                    @if comments.is_empty() {
                        p class="empty" { "No hay comentarios aún. ¡Sé el primero en comentar!" }
                    } @else {
                        ul class="comment-list" {
                            @for comment in &comments {
                                li { (comment_card(comment, now)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn comment_card(comment: &Comment, now: Timestamp) -> Markup {
    // Short identifier shown as a badge, like a ticket number.
    let badge: String = comment.id.as_str().chars().take(8).collect();
    html! {
        article class="comment" {
            header {
                span class="author" { (comment.author) }
                span class="badge" { "#" (badge) }
                time datetime=(comment.created_at) {
                    (time_format::fuzzy_age(comment.created_at, now))
                }
            }
            p class="body" { (comment.body) }
        }
    }
}

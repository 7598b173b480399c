use maud::Markup;
use rocket::{
    self,
    form::Form,
    get, post,
    request::FlashMessage,
    response::{
        content::{RawCss, RawJavaScript},
        Flash, Redirect,
    },
    routes, uri, FromForm, Route, State,
};

use super::guards::*;
use crate::web::{Cfg, OriginLookup, Store, STORE_DOWN_MESSAGE};
use opina_application::{
    error::{AppError, BError},
    prelude::*,
};
use opina_core::{entities::Timestamp, usecases};

mod view;


const MAIN_CSS: &str = include_str!("main.css");
const MAIN_JS: &str = include_str!("main.js");

pub fn routes() -> Vec<Route> {
    routes![get_index, post_comment, get_main_css, get_main_js]
}

async fn listing(store: &Store) -> view::Listing {
    match refresh_comments(store.0.as_ref()).await {
        Ok(comments) => view::Listing::Loaded(comments),
        Err(err) => {
            warn!("Unable to load the comment listing: {err}");
            view::Listing::Unavailable
        }
    }
}

#[get("/")]
pub async fn get_index(
    store: &State<Store>,
    cfg: &State<Cfg>,
    flash: Option<FlashMessage<'_>>,
) -> Markup {
    let notice = flash.map(|flash| {
        let message = flash.message().to_string();
        match flash.kind() {
            "success" => view::Notice::Success(message),
            _ => view::Notice::Error(message),
        }
    });
    view::index(
        notice,
        &view::FormValues::default(),
        listing(store).await,
        Timestamp::now(),
        cfg.auto_refresh_secs,
    )
}

#[derive(FromForm)]
pub struct CommentForm {
    nombre: String,
    comentario: String,
}

#[post("/comentarios", data = "<data>")]
pub async fn post_comment(
    store: &State<Store>,
    guard: &State<SubmissionGuard>,
    origin_lookup: &State<OriginLookup>,
    cfg: &State<Cfg>,
    submitter: SubmitterInfo,
    data: Form<CommentForm>,
) -> Result<Flash<Redirect>, Markup> {
    let CommentForm { nombre, comentario } = data.into_inner();
    let (submitter_address, client_descriptor) = submitter.resolve(origin_lookup.0.as_ref()).await;
    let new_comment = usecases::NewComment {
        author: nombre.clone(),
        body: comentario.clone(),
        submitter_address,
        client_descriptor,
    };
    match submit_comment(store.0.as_ref(), guard.inner(), new_comment).await {
        Ok(_) => Ok(Flash::success(
            Redirect::to(uri!(get_index)),
            "¡Comentario enviado exitosamente!",
        )),
        Err(err) => {
            // Re-render with the entered values so nothing is lost.
            let form = view::FormValues {
                author: nombre,
                body: comentario,
            };
            Err(view::index(
                Some(view::Notice::Error(user_message(&err))),
                &form,
                listing(store).await,
                Timestamp::now(),
                cfg.auto_refresh_secs,
            ))
        }
    }
}

fn user_message(err: &AppError) -> String {
    match err {
        AppError::Business(BError::Parameter(err)) => err.to_string(),
        AppError::Business(BError::Repo(_)) => STORE_DOWN_MESSAGE.to_string(),
        _ => "No se pudo enviar el comentario. Inténtelo de nuevo más tarde.".to_string(),
    }
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

#[get("/main.js")]
pub fn get_main_js() -> RawJavaScript<&'static str> {
    RawJavaScript(MAIN_JS)
}

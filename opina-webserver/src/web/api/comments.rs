use super::*;

#[get("/comments")]
pub async fn get_comments(store: &State<Store>) -> Result<Vec<opina_boundary::Comment>> {
    let comments = refresh_comments(store.0.as_ref()).await?;
    Ok(Json(comments.into_iter().map(Into::into).collect()))
}

#[post("/comments", data = "<data>")]
pub async fn post_comment(
    store: &State<Store>,
    guard: &State<SubmissionGuard>,
    origin_lookup: &State<OriginLookup>,
    submitter: SubmitterInfo,
    data: JsonResult<'_, opina_boundary::NewComment>,
) -> Result<opina_boundary::Comment> {
    let opina_boundary::NewComment { author, body } = data?.into_inner();
    let (submitter_address, client_descriptor) = submitter.resolve(origin_lookup.0.as_ref()).await;
    let new_comment = usecases::NewComment {
        author,
        body,
        submitter_address,
        client_descriptor,
    };
    let comment = submit_comment(store.0.as_ref(), guard.inner(), new_comment).await?;
    Ok(Json(comment.into()))
}

use crate::errors::ResultResp;
use astra::{Body, Response, ResponseBuilder};
use http::{header, StatusCode};
use maud::Markup;

fn build(status: StatusCode, content_type: &str, body: Body) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .body(body)?;
    Ok(resp)
}

pub fn html_response(markup: Markup) -> ResultResp {
    build(
        StatusCode::OK,
        mime::TEXT_HTML_UTF_8.as_ref(),
        Body::from(markup.into_string()),
    )
}

pub fn text_response(text: &str) -> ResultResp {
    build(
        StatusCode::OK,
        mime::TEXT_PLAIN_UTF_8.as_ref(),
        Body::from(text.to_string()),
    )
}

/// 302 to `location`.
pub fn redirect(location: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, location)
        .body(Body::empty())?;
    Ok(resp)
}

/// Used by the error page, which must not fail itself.
pub fn html_with_status(status: StatusCode, markup: Markup) -> Response {
    let mut resp = Response::new(Body::from(markup.into_string()));
    *resp.status_mut() = status;
    resp.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("text/html; charset=utf-8"),
    );
    resp
}

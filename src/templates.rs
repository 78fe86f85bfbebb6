use askama::Template;

#[derive(Template)]
#[template(path = "echo.html")]
pub struct EchoTemplate<'a> {
    pub code: &'a str,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub message: &'a str,
}

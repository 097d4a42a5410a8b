use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),
}

impl From<tera::Error> for RenderError {
    fn from(e: tera::Error) -> Self {
        RenderError::TemplateRender(e.to_string())
    }
}

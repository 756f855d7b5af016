//! Context Service - reading contexts through the parser port.

use tracing::{debug, instrument};

use crate::{
    application::ports::ContextParser,
    domain::{Context, ContextFormat},
    error::RepsvcResult,
};

/// Service for loading contexts.
pub struct ContextService {
    parser: Box<dyn ContextParser>,
}

impl ContextService {
    /// Create a new context service.
    pub fn new(parser: Box<dyn ContextParser>) -> Self {
        Self { parser }
    }

    /// Parse a context from text.
    #[instrument(skip_all, fields(format = %format, bytes = source.len()))]
    pub fn load(&self, source: &str, format: ContextFormat) -> RepsvcResult<Context> {
        let context = self.parser.parse(source, format)?;
        debug!(name = %context.name, "Context loaded");
        Ok(context)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::eq;

    use super::*;
    use crate::application::ApplicationError;
    use crate::error::RepsvcError;

    mock! {
        pub Parser {}
        impl ContextParser for Parser {
            fn parse(&self, source: &str, format: ContextFormat) -> RepsvcResult<Context>;
        }
    }

    #[test]
    fn delegates_to_parser() {
        let mut parser = MockParser::new();
        parser
            .expect_parse()
            .with(eq("name: web"), eq(ContextFormat::Yaml))
            .times(1)
            .returning(|_, _| Ok(Context::new("web")));

        let service = ContextService::new(Box::new(parser));
        let ctx = service.load("name: web", ContextFormat::Yaml).unwrap();
        assert_eq!(ctx.name, "web");
    }

    #[test]
    fn parser_errors_propagate() {
        let mut parser = MockParser::new();
        parser.expect_parse().returning(|_, format| {
            Err(ApplicationError::ContextParse {
                format: format.as_str(),
                reason: "unexpected end of input".into(),
            }
            .into())
        });

        let service = ContextService::new(Box::new(parser));
        assert!(matches!(
            service.load("{", ContextFormat::Json),
            Err(RepsvcError::Application(ApplicationError::ContextParse { format: "json", .. }))
        ));
    }
}

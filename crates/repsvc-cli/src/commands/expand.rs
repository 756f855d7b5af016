//! Implementation of the `repsvc expand` command.
//!
//! Responsibility: assemble a `Context` from the context file and flags, call
//! the core expand service, and write the document. No expansion rules live
//! here.

use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, info, instrument};

use repsvc_adapters::{FileContextLoader, renderer_for};
use repsvc_core::{
    application::{ContextService, ExpandService},
    domain::{Context, ContextFormat, DocumentFormat, LabelPolicy, LabelSet, Properties},
};

use crate::{
    cli::ExpandArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `repsvc expand` command.
///
/// 1. Load the context file, if one was given
/// 2. Overlay the context flags
/// 3. Expand and render with the chosen format and label policy
/// 4. Write to `--output` or stdout
#[instrument(skip_all, fields(file = ?args.file))]
pub fn execute(args: ExpandArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let base = match &args.file {
        Some(path) => load_context(path, args.input_format.map(Into::into))?,
        None => Context::default(),
    };
    let context = base.overlay(flag_context(&args));
    debug!(name = %context.name, "Context assembled");

    let format = args
        .format
        .map(DocumentFormat::from)
        .unwrap_or(config.defaults.format);
    let policy = if args.allow_name_label {
        LabelPolicy::Override
    } else {
        config.defaults.label_policy
    };

    let document = ExpandService::new(renderer_for(format))
        .with_policy(policy)
        .expand(&context)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &document)
                .with_cli_context(|| format!("Failed to write '{}'", path.display()))?;
            info!(path = %path.display(), %format, "Manifest written");
            output.success(&format!(
                "Wrote {}-service and {}-rc to {}",
                context.name,
                context.name,
                path.display()
            ))?;
        }
        None => output.document(&document)?,
    }

    Ok(())
}

/// Read and parse a context file; `-` reads stdin.
fn load_context(path: &Path, format: Option<ContextFormat>) -> CliResult<Context> {
    let format = format
        .or_else(|| ContextFormat::from_path(path))
        .unwrap_or_default();

    let source = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| read_error(path, e))?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| read_error(path, e))?
    };
    debug!(path = %path.display(), %format, bytes = source.len(), "Context read");

    let context = ContextService::new(Box::new(FileContextLoader::new())).load(&source, format)?;
    Ok(context)
}

fn read_error(path: &Path, err: io::Error) -> CliError {
    match err.kind() {
        io::ErrorKind::NotFound => CliError::ContextFileNotFound {
            path: path.to_path_buf(),
        },
        io::ErrorKind::InvalidData => CliError::InvalidInput {
            message: format!("'{}' is not valid UTF-8 text", path.display()),
            source: Some(Box::new(err)),
        },
        _ => CliError::IoError {
            message: format!("Failed to read '{}'", path.display()),
            source: err,
        },
    }
}

/// Context built from flags only; unset flags stay `None`.
fn flag_context(args: &ExpandArgs) -> Context {
    let labels = (!args.labels.is_empty()).then(|| args.labels.iter().cloned().collect::<LabelSet>());

    Context::new(args.name.clone().unwrap_or_default()).with_properties(Properties {
        container_name: args.container_name.clone(),
        namespace: args.namespace.clone(),
        protocol: args.protocol.clone(),
        service_port: args.service_port,
        target_port: args.target_port,
        container_port: args.container_port,
        replicas: args.replicas,
        image: args.image.clone(),
        labels,
        external_service: args.external,
    })
}

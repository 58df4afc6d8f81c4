//! Prints the nodes along an axis of an XML document's outermost element.
//!
//! ```text
//! RUST_LOG=debug cargo run --example print_axis -- pipeline.xpl --axis child --mode pipeline
//! ```
//!
//! With `--option name=true|false` (repeatable) the pipeline mode resolves
//! use-when expressions of the form `$name` and `not($name)`.
use axisnodes::{
    Axis, AxisNodes, Error, FilterMode, UseWhenError, UseWhenEvaluator, XmlDocument, XmlNode, describe,
};
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "List the filtered nodes along an axis of an XML document")]
struct Args {
    /// The XML document to read
    file: PathBuf,

    /// The axis to walk from the document element
    #[arg(long, default_value = "child")]
    axis: Axis,

    /// all, significant or pipeline
    #[arg(long, default_value = "all")]
    mode: FilterMode,

    /// A boolean static option, as name=true or name=false
    #[arg(long = "option", value_parser = parse_option)]
    options: Vec<(String, bool)>,
}

fn parse_option(s: &str) -> Result<(String, bool), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{s}'"))?;
    let value = value
        .parse::<bool>()
        .map_err(|e| format!("option {name}: {e}"))?;
    Ok((name.to_string(), value))
}

struct StaticOptions(HashMap<String, bool>);

impl<'a> UseWhenEvaluator<XmlNode<'a, 'a>> for StaticOptions {
    fn use_when(&self, _: &XmlNode<'a, 'a>, expression: &str) -> Result<bool, UseWhenError> {
        let (name, negate) = match expression.strip_prefix("not($").and_then(|e| e.strip_suffix(')')) {
            Some(name) => (name, true),
            None => match expression.strip_prefix('$') {
                Some(name) => (name, false),
                None => return Err(format!("unsupported use-when expression '{expression}'").into()),
            },
        };
        let value = self
            .0
            .get(name)
            .copied()
            .ok_or_else(|| format!("no value for static option ${name}"))?;
        Ok(value != negate)
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = Args::parse();

    let text = std::fs::read_to_string(&args.file)?;
    let doc = XmlDocument::parse(&text)?;
    let options = StaticOptions(args.options.into_iter().collect());
    let context: Option<&dyn UseWhenEvaluator<XmlNode<'_, '_>>> = if options.0.is_empty() {
        None
    } else {
        Some(&options)
    };

    let nodes = AxisNodes::with_context(context, doc.document_element(), args.axis, args.mode);
    for (index, node) in nodes.iter().enumerate() {
        match node {
            Ok(node) => println!("{:>4}  {}", index + 1, describe(&node)),
            Err(err) => eprintln!("{:>4}  error: {}", index + 1, err),
        }
    }
    Ok(())
}

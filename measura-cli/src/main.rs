//! Measura CLI
//!
//! Line-oriented JSON over stdin/stdout. One request per line, one response
//! line per request.
//!
//! Operations (`"op"`, default `"convert"`):
//! - convert: parse `input` (engineering format) or `value` + `unit`, and
//!   optionally convert to `target`
//! - kinds: list registered quantity kinds with their units
//! - kinematic_viscosity: ν from `dynamic_viscosity` and `density`, with
//!   every input validated before computing
//!
//! ```text
//! {"quantity": "Pressure", "input": "1[bar]", "target": "psi"}
//! {"ok":true,"kind":"Pressure","value":14.503773773020925,"unit":"psi",...}
//! ```

mod config;

use std::io::{self, BufRead, Write};

use measura_core::{AnyQuantity, FormatSettings, QuantityKind, UnitError, Violation};
use measura_quantities::{derived, Density, DynamicViscosity, QUANTITIES};
use measura_registry::QuantityRegistry;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, info, warn};

use config::Config;

const SERVER_NAME: &str = "measura";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Protocol-level error codes; library errors carry their own
mod codes {
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const UNKNOWN_QUANTITY: &str = "UNKNOWN_QUANTITY";
    pub const UNKNOWN_OP: &str = "UNKNOWN_OP";
    pub const MISSING_INPUT: &str = "MISSING_INPUT";
}

#[derive(Debug, Default, Deserialize)]
struct Request {
    #[serde(default)]
    op: Option<String>,
    #[serde(default)]
    quantity: Option<String>,
    #[serde(default)]
    input: Option<String>,
    #[serde(default)]
    value: Option<f64>,
    #[serde(default)]
    unit: Option<String>,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    digits: Option<u32>,
    #[serde(default)]
    dynamic_viscosity: Option<String>,
    #[serde(default)]
    density: Option<String>,
}

#[derive(Debug, Serialize)]
struct CliError {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    violations: Vec<Violation>,
}

impl CliError {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
            violations: Vec::new(),
        }
    }

    fn to_json(&self) -> JsonValue {
        let mut response = json!({ "ok": false });
        if let (JsonValue::Object(target), Ok(JsonValue::Object(fields))) =
            (&mut response, serde_json::to_value(self))
        {
            target.extend(fields);
        }
        response
    }
}

impl From<UnitError> for CliError {
    fn from(err: UnitError) -> Self {
        let violations = match &err {
            UnitError::Validation(failure) => failure.violations().to_vec(),
            _ => Vec::new(),
        };
        CliError {
            code: err.code(),
            message: err.to_string(),
            violations,
        }
    }
}

fn main() {
    let config = Config::from_env();
    config.init_logging();

    let registry: &QuantityRegistry = &QUANTITIES;
    info!(
        name = SERVER_NAME,
        version = SERVER_VERSION,
        quantities = registry.len(),
        digits = config.format.relevant_digits,
        "ready, waiting for requests"
    );

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("end of input");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                debug!(bytes = line.len(), "request received");

                let response = handle_line(registry, &config.format, line);

                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{}", response).and_then(|_| stdout.flush()) {
                    warn!(error = %e, "failed to write response");
                    break;
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to read input");
                break;
            }
        }
    }
}

/// One request line in, one response value out
fn handle_line(registry: &QuantityRegistry, settings: &FormatSettings, line: &str) -> JsonValue {
    let request: Request = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            debug!(error = %e, "unparsable request");
            return CliError::new(codes::BAD_REQUEST, format!("Parse error: {}", e)).to_json();
        }
    };

    match handle_request(registry, settings, &request) {
        Ok(response) => response,
        Err(e) => {
            debug!(code = e.code, message = %e.message, "request failed");
            e.to_json()
        }
    }
}

fn handle_request(
    registry: &QuantityRegistry,
    settings: &FormatSettings,
    request: &Request,
) -> Result<JsonValue, CliError> {
    let settings = request
        .digits
        .map(|d| settings.with_relevant_digits(d))
        .unwrap_or(*settings);

    match request.op.as_deref().unwrap_or("convert") {
        "convert" => handle_convert(registry, &settings, request),
        "kinds" => Ok(json!({ "ok": true, "kinds": registry.metas() })),
        "kinematic_viscosity" => handle_kinematic_viscosity(registry, &settings, request),
        other => Err(CliError::new(
            codes::UNKNOWN_OP,
            format!("Unknown op '{}'. Available: convert, kinds, kinematic_viscosity", other),
        )),
    }
}

fn resolve_kind(registry: &QuantityRegistry, name: Option<&str>) -> Result<QuantityKind, CliError> {
    let name = name.ok_or_else(|| CliError::new(codes::MISSING_INPUT, "Missing 'quantity'"))?;
    registry.kind_by_name(name).ok_or_else(|| {
        let similar: Vec<&str> = registry.similar_kinds(name).iter().take(3).map(|k| k.name()).collect();
        let mut message = format!("Unknown quantity '{}'", name);
        if !similar.is_empty() {
            message.push_str(&format!(". Similar: {}", similar.join(", ")));
        }
        CliError::new(codes::UNKNOWN_QUANTITY, message)
    })
}

fn handle_convert(
    registry: &QuantityRegistry,
    settings: &FormatSettings,
    request: &Request,
) -> Result<JsonValue, CliError> {
    let kind = resolve_kind(registry, request.quantity.as_deref())?;

    let quantity = match (&request.input, request.value) {
        (Some(input), _) => registry.parse_from_eng_format(kind, input)?,
        (None, Some(value)) => registry.parse_from_symbol(kind, value, request.unit.as_deref())?,
        (None, None) => {
            return Err(CliError::new(codes::MISSING_INPUT, "Provide 'input' or 'value'"));
        }
    };

    let quantity = match request.target.as_deref() {
        Some(target) => quantity.convert_to_symbol(target)?,
        None => quantity,
    };

    Ok(quantity_json(quantity.as_ref(), settings))
}

fn handle_kinematic_viscosity(
    registry: &QuantityRegistry,
    settings: &FormatSettings,
    request: &Request,
) -> Result<JsonValue, CliError> {
    let dynamic: Option<DynamicViscosity> = request
        .dynamic_viscosity
        .as_deref()
        .map(|text| registry.parse_eng(text))
        .transpose()?;
    let density: Option<Density> = request
        .density
        .as_deref()
        .map(|text| registry.parse_eng(text))
        .transpose()?;

    let nu = derived::kinematic_viscosity(dynamic, density).map_err(UnitError::from)?;
    let nu: Box<dyn AnyQuantity> = match request.target.as_deref() {
        Some(target) => nu.convert_to_symbol(target)?,
        None => Box::new(nu),
    };

    Ok(quantity_json(nu.as_ref(), settings))
}

fn quantity_json(quantity: &dyn AnyQuantity, settings: &FormatSettings) -> JsonValue {
    json!({
        "ok": true,
        "kind": quantity.kind(),
        "value": quantity.value(),
        "unit": quantity.symbol(),
        "eng": quantity.to_eng_format(),
        "display": quantity.format_with(settings),
        "base_value": quantity.base_value(),
        "base_unit": quantity.base_symbol(),
    })
}

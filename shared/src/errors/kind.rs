//! Error taxonomy shared by every module
//!
//! Each domain module describes its failure conditions as a closed enum
//! implementing [`AppError`]. The common kinds live in [`ErrorCode`].

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{self, Debug, Display};

/// Format specifiers in detail templates: `%[index$][flags][width][.precision]conversion`
static SPECIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"%(?:([1-9][0-9]*)\$)?",
        r"([-#+ 0,(]*)([0-9]+)?(?:\.([0-9]+))?",
        r"([a-zA-Z%])",
    ))
    .unwrap()
});

/// Capability set every error kind exposes
///
/// `code` values are published to clients and must stay stable once released.
pub trait AppError: Debug + Send + Sync + 'static {
    /// HTTP status code returned for this kind
    fn http_status(&self) -> u16;

    /// Short human-readable label
    fn title(&self) -> &'static str;

    /// Stable dotted machine identifier, e.g. `COMMON.BAD_REQUEST`
    fn code(&self) -> &'static str;

    /// Detail message, possibly containing positional placeholders
    fn detail(&self) -> &'static str;

    /// Substitute `args` into the detail template.
    ///
    /// Never fails: a template that cannot be formatted with the given
    /// arguments is returned unformatted.
    fn format(&self, args: &[&dyn Display]) -> String {
        format_detail(self.detail(), args).unwrap_or_else(|| self.detail().to_string())
    }
}

/// Substitute positional arguments into a detail template.
///
/// Supports `%s`, `%S` (upper-cased) and `%d` with an optional explicit
/// index (`%2$s`), width, `-` (left-justify), and for `%d` the `0` and `+`
/// flags. `%s` accepts a precision that truncates. `%%` and `%n` are escapes.
///
/// Returns `None` when the template references an argument that was not
/// supplied, passes a non-integer to `%d`, or uses an unsupported conversion
/// or flag. Surplus arguments are ignored.
pub fn format_detail(template: &str, args: &[&dyn Display]) -> Option<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    let mut next_ordinary = 0;

    for caps in SPECIFIER.captures_iter(template) {
        let whole = caps.get(0)?;
        out.push_str(&template[last..whole.start()]);
        last = whole.end();

        let explicit = caps.get(1);
        let flags = caps.get(2).map_or("", |m| m.as_str());
        let width = match caps.get(3) {
            Some(w) => Some(w.as_str().parse::<usize>().ok()?),
            None => None,
        };
        let precision = match caps.get(4) {
            Some(p) => Some(p.as_str().parse::<usize>().ok()?),
            None => None,
        };
        let conversion = &caps[5];

        match conversion {
            "%" | "n" => {
                if explicit.is_some() || !flags.is_empty() || precision.is_some() {
                    return None;
                }
                let escaped = if conversion == "%" { "%" } else { "\n" };
                out.push_str(&pad(escaped.to_string(), width, false));
            }
            "s" | "S" | "d" => {
                let index = match explicit {
                    Some(position) => position.as_str().parse::<usize>().ok()? - 1,
                    None => {
                        next_ordinary += 1;
                        next_ordinary - 1
                    }
                };
                let arg = args.get(index)?.to_string();
                let left = flags.contains('-');
                if left && width.is_none() {
                    return None;
                }

                let text = if conversion == "d" {
                    format_integer(&arg, flags, width, precision)?
                } else {
                    format_text(&arg, conversion == "S", flags, precision)?
                };
                out.push_str(&pad(text, width, left));
            }
            _ => return None,
        }
    }

    out.push_str(&template[last..]);
    Some(out)
}

fn format_text(arg: &str, upper: bool, flags: &str, precision: Option<usize>) -> Option<String> {
    if flags.chars().any(|flag| flag != '-') {
        return None;
    }
    let text = match precision {
        Some(max) => arg.chars().take(max).collect(),
        None => arg.to_string(),
    };
    Some(if upper { text.to_uppercase() } else { text })
}

fn format_integer(
    arg: &str,
    flags: &str,
    width: Option<usize>,
    precision: Option<usize>,
) -> Option<String> {
    if precision.is_some() || flags.chars().any(|flag| !matches!(flag, '-' | '0' | '+')) {
        return None;
    }
    let zero = flags.contains('0');
    if zero && (width.is_none() || flags.contains('-')) {
        return None;
    }

    let value: i128 = arg.parse().ok()?;
    let sign = if value < 0 {
        "-"
    } else if flags.contains('+') {
        "+"
    } else {
        ""
    };
    let digits = value.unsigned_abs().to_string();

    let fill = match width {
        Some(width) if zero => width.saturating_sub(sign.len() + digits.len()),
        _ => 0,
    };
    Some(format!("{}{}{}", sign, "0".repeat(fill), digits))
}

/// Pad `text` with spaces to `width` characters
fn pad(text: String, width: Option<usize>, left: bool) -> String {
    let len = text.chars().count();
    match width {
        Some(width) if width > len => {
            let spaces = " ".repeat(width - len);
            if left {
                text + &spaces
            } else {
                spaces + &text
            }
        }
        _ => text,
    }
}

/// Common error kinds available to every module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // 5xx
    InternalServerError,

    // common 4xx
    BadRequest,
    InvalidInput,
    MissingParameter,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    TooManyRequests,
}

impl ErrorCode {
    /// Every common kind, in declaration order
    pub const ALL: [ErrorCode; 9] = [
        ErrorCode::InternalServerError,
        ErrorCode::BadRequest,
        ErrorCode::InvalidInput,
        ErrorCode::MissingParameter,
        ErrorCode::Unauthorized,
        ErrorCode::Forbidden,
        ErrorCode::NotFound,
        ErrorCode::Conflict,
        ErrorCode::TooManyRequests,
    ];

    /// Look up a common kind by its published code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    const fn spec(self) -> (u16, &'static str, &'static str, &'static str) {
        match self {
            ErrorCode::InternalServerError => (
                500,
                "COMMON.INTERNAL_ERROR",
                "Internal Server Error",
                "An internal server error occurred.",
            ),
            ErrorCode::BadRequest => (
                400,
                "COMMON.BAD_REQUEST",
                "Bad Request",
                "The request is malformed.",
            ),
            ErrorCode::InvalidInput => (
                400,
                "COMMON.INVALID_INPUT",
                "Invalid Input",
                "Input is invalid: %s",
            ),
            ErrorCode::MissingParameter => (
                400,
                "COMMON.MISSING_PARAMETER",
                "Missing Parameter",
                "Required request parameter is missing: %s",
            ),
            ErrorCode::Unauthorized => (
                401,
                "COMMON.UNAUTHORIZED",
                "Unauthorized",
                "Authentication is required.",
            ),
            ErrorCode::Forbidden => (
                403,
                "COMMON.FORBIDDEN",
                "Forbidden",
                "Access to this resource is denied.",
            ),
            ErrorCode::NotFound => (
                404,
                "COMMON.NOT_FOUND",
                "Not Found",
                "Requested resource not found.",
            ),
            ErrorCode::Conflict => (
                409,
                "COMMON.CONFLICT",
                "Conflict",
                "The resource is in conflict with its current state.",
            ),
            ErrorCode::TooManyRequests => (
                429,
                "COMMON.TOO_MANY_REQUESTS",
                "Too Many Requests",
                "Too many requests. Please try again later.",
            ),
        }
    }
}

impl AppError for ErrorCode {
    fn http_status(&self) -> u16 {
        self.spec().0
    }

    fn code(&self) -> &'static str {
        self.spec().1
    }

    fn title(&self) -> &'static str {
        self.spec().2
    }

    fn detail(&self) -> &'static str {
        self.spec().3
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

//! Literal typing rules
//!
//! Maps an RDF literal to a native scalar by its XSD datatype annotation.

use crate::experiment::AttributeValue;
use crate::model::Literal;
use crate::vocab::xsd;

/// Convert a literal into a typed attribute value
///
/// Integer datatypes decode to `Integer`, float/double to `Float`, everything
/// else (including unknown datatypes and unparsable lexical forms) degrades to
/// the literal's string form. Total: never fails.
pub fn typed_value(literal: &Literal) -> AttributeValue {
    if let Some(datatype) = literal.datatype() {
        if datatype == &*xsd::INT || datatype == &*xsd::INTEGER || datatype == &*xsd::LONG {
            if let Ok(value) = literal.value().parse::<i64>() {
                return AttributeValue::Integer(value);
            }
        } else if datatype == &*xsd::FLOAT || datatype == &*xsd::DOUBLE {
            if let Ok(value) = literal.value().parse::<f64>() {
                return AttributeValue::Float(value);
            }
        }
    }
    AttributeValue::String(literal.value().to_string())
}

//! Business error codes returned in the `code` field of failed responses.

use std::collections::HashMap;

/// Rows in the order the API publishes them.
///
/// The published list repeats some codes. Later rows overwrite earlier ones
/// when the lookup map is built, so the last definition is the one callers
/// see.
const ERROR_ROWS: &[(i64, &str)] = &[
    (-8, "Your token has expired. Please generate a new token"),
    (-15, "Provided an invalid token"),
    (-16, "Server was unable to authenticate your token"),
    (-17, "Token is invalid or has expired"),
    (-50, "Invalid parameters passed"),
    (-51, "Invalid order ID"),
    (-52, "Order is not in a modifiable state"),
    (-53, "Invalid position ID"),
    (-54, "Position is not in an exitable state"),
    (-55, "Invalid convert quantity"),
    (-56, "Order already in cancelled or completed state"),
    (-99, "Order placement rejected"),
    (-100, "Invalid order type"),
    (-101, "Invalid side"),
    (-102, "Invalid product type"),
    (-103, "Invalid validity"),
    (-104, "Invalid limit price"),
    (-105, "Invalid stop price"),
    (-106, "Invalid quantity"),
    (-107, "Invalid disclosed quantity"),
    (-150, "Invalid date format"),
    (-151, "Invalid resolution"),
    (-152, "History range exceeds the allowed window"),
    (-157, "Invalid request parameters for e-DIS"),
    (-158, "TPIN generation failed"),
    (-300, "Invalid symbol provided"),
    (-310, "Symbol is not tradable at the moment"),
    (-352, "Invalid App ID provided"),
    (-353, "App ID is not authorised for this user"),
    (-392, "Price is out of the circuit limits"),
    (-429, "API rate limit exceeded"),
    (-50, "Invalid input, please check the request parameters"),
    (-16, "Unauthorized, please login again"),
];

lazy_static::lazy_static! {
    static ref ERROR_TABLE: HashMap<i64, &'static str> = {
        let mut table = HashMap::with_capacity(ERROR_ROWS.len());
        for (code, text) in ERROR_ROWS {
            table.insert(*code, *text);
        }
        table
    };
}

/// Human description of a business error code, if the code is published.
pub fn error_description(code: i64) -> Option<&'static str> {
    ERROR_TABLE.get(&code).copied()
}

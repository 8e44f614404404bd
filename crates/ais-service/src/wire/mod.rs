//! Wire-value mapping between domain entities and `serde_json::Value`
//! trees in the response shape clients expect. Encoding to bytes is the
//! HTTP layer's concern.

mod folder;
mod item;

pub use folder::{folder_from_wire, folder_value};
pub use item::{item_from_wire, item_value};

use serde_json::{Value, json};

/// An `{"href": uri}` reference block.
pub(crate) fn href(uri: String) -> Value {
    json!({ "href": uri })
}

//! Browser clipboard access.

use wasm_bindgen_futures::JsFuture;

/// Copy `text` to the system clipboard. Resolves to `false` when the
/// browser rejected the write (permissions, insecure context).
pub(crate) async fn copy_text(text: &str) -> bool {
    let clipboard = gloo::utils::window().navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await.is_ok()
}

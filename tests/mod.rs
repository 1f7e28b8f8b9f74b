/// Integration tests for payment-picker
///
/// - picker: widget interaction, selection dispatch and fetch handling
/// - api: fetch collaborators
mod api;

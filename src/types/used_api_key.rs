use derivative::Derivative;

/// A struct to hold the API key a request was made with.
///
/// The key is masked in [`Debug`] output.
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct UsedApiKey {
    #[derivative(Debug(format_with = "crate::utils::mask_fmt"))]
    pub api_key: String,
}

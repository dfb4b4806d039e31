use crate::utils::error::Result;
use std::future::Future;
use url::Url;

/// Something that can GET a URL and hand back the response body.
///
/// Implementations perform exactly one request per call and return the
/// transport failure unchanged; decoding happens in the caller.
pub trait JsonSource: Send + Sync {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<String>> + Send;
}

/// Lets several components share one caller-owned source by reference.
impl<T: JsonSource> JsonSource for &T {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<String>> + Send {
        (**self).fetch(url)
    }
}

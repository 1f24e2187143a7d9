//! External support links and the capability to open them.

use super::{ServiceError, ServiceResult};
use tracing::info;

/// A professional support resource shown on the support screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// The support resources, in display order.
pub static SUPPORT_LINKS: [SupportLink; 3] = [
    SupportLink {
        label: "Jogadores Anônimos",
        url: "https://www.gamblersanonymous.org",
    },
    SupportLink {
        label: "Centro de Valorização da Vida (CVV)",
        url: "https://www.cvv.org.br",
    },
    SupportLink {
        label: "Psicólogos Online",
        url: "https://www.psicologiaviva.com.br",
    },
];

/// Opens a URL in whatever external handler the host provides.
pub trait UriOpener {
    fn open_external_uri(&self, url: &str) -> ServiceResult<()>;
}

/// Opens links with the operating system's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUriOpener;

impl UriOpener for SystemUriOpener {
    fn open_external_uri(&self, url: &str) -> ServiceResult<()> {
        info!("Opening external link {}", url);
        open::that_detached(url).map_err(|source| ServiceError::ExternalOpen {
            url: url.to_string(),
            source,
        })
    }
}

//! Client details reported with the visitor alert.

use folio_core::ClientDetails;
use iced::Size;

/// Details for this process. The monitor size stands in for the screen; the
/// window size is used when no monitor could be queried.
pub fn client_details(monitor: Option<Size>, window: Size) -> ClientDetails {
    let screen = monitor
        .filter(|size| size.width >= 1.0 && size.height >= 1.0)
        .unwrap_or(window);
    ClientDetails::current(screen.width.round() as u32, screen.height.round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Size = Size::new(1280.0, 800.0);

    #[test]
    fn test_monitor_size_is_reported_as_screen() {
        let details = client_details(Some(Size::new(2560.0, 1440.0)), WINDOW);
        assert_eq!(details.screen(), "2560x1440");
    }

    #[test]
    fn test_missing_monitor_falls_back_to_window() {
        assert_eq!(client_details(None, WINDOW).screen(), "1280x800");
        assert_eq!(client_details(Some(Size::new(0.0, 0.0)), WINDOW).screen(), "1280x800");
    }
}

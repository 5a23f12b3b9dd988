//! One mounted calculator widget.
//!
//! A [`Widget`] pairs the mount-time [`WidgetConfig`] with the live field
//! state. It lives for one session and is dropped with it.

use giving_core::calculations::{
    DenominationSynchronizer, EditOutcome, ReferenceRow, ReferenceTable,
};
use giving_core::{Denomination, WidgetConfig};
use tracing::info;

use crate::input::{InputRejected, filter_amount};
use crate::render;

/// Raw override strings supplied by the host (flags or preferences file).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetOverrides {
    pub years: Option<String>,
    pub gift_levels: Option<String>,
}

/// Builds a widget from host overrides. Malformed overrides fall back to the
/// defaults; mounting never fails.
pub fn mount(overrides: &WidgetOverrides) -> Widget {
    let config =
        WidgetConfig::from_overrides(overrides.years.as_deref(), overrides.gift_levels.as_deref());
    info!(
        term = %config.term,
        gift_levels = config.gift_levels.len(),
        "widget mounted"
    );
    Widget::new(config)
}

#[derive(Debug, Clone)]
pub struct Widget {
    config: WidgetConfig,
    sync: DenominationSynchronizer,
}

impl Widget {
    pub fn new(config: WidgetConfig) -> Self {
        let sync = DenominationSynchronizer::new(config.term);
        Self { config, sync }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn synchronizer(&self) -> &DenominationSynchronizer {
        &self.sync
    }

    /// Types `raw` into one field.
    ///
    /// Refused keystrokes leave the field untouched; anything else is handed
    /// to the synchronizer, which decides whether it propagates.
    pub fn edit(
        &mut self,
        denomination: Denomination,
        raw: &str,
    ) -> Result<EditOutcome, InputRejected> {
        let text = filter_amount(raw)?;
        Ok(self.sync.edit(denomination, text))
    }

    /// Reference rows highlighted against the live total.
    pub fn reference_rows(&self) -> Vec<ReferenceRow> {
        ReferenceTable::new(&self.config).rows(self.sync.total())
    }

    /// The whole table as text: header, input row, reference rows.
    pub fn render(&self) -> String {
        render::render_table(self.sync.state(), &self.reference_rows())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn mount_applies_overrides() {
        let widget = mount(&WidgetOverrides {
            years: Some("2".to_string()),
            gift_levels: Some("1000,500".to_string()),
        });

        assert_eq!(widget.config().term.years(), 2);
        assert_eq!(widget.reference_rows().len(), 2);
    }

    #[test]
    fn mount_with_malformed_overrides_uses_defaults() {
        let widget = mount(&WidgetOverrides {
            years: Some("soon".to_string()),
            gift_levels: Some("lots".to_string()),
        });

        assert_eq!(widget.config(), &WidgetConfig::default());
    }

    #[test]
    fn rejected_input_leaves_fields_alone() {
        let mut widget = Widget::new(WidgetConfig::default());
        widget.edit(Denomination::Total, "36000").unwrap();

        let result = widget.edit(Denomination::Year, "-1");

        assert_eq!(result, Err(InputRejected::Negative));
        assert_eq!(widget.synchronizer().field(Denomination::Year), "12000.00");
    }

    #[test]
    fn edits_drive_reference_highlight() {
        let mut widget = Widget::new(WidgetConfig::default());

        widget.edit(Denomination::Year, "5000").unwrap();

        assert_eq!(widget.synchronizer().total(), Some(dec!(15000)));
        let current: Vec<_> = widget
            .reference_rows()
            .into_iter()
            .filter(|r| r.is_current_row)
            .map(|r| r.gift_level.total())
            .collect();
        assert_eq!(current, vec![dec!(15000)]);
    }
}

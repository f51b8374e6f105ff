//! # Converter Form
//!
//! The observable state triple behind a temperature-conversion screen.
//!
//! This struct wires together:
//! - The three mutable state fields (value, source unit, destination unit)
//! - The conversion core (recompute on every change)
//! - Attached views (re-render on every change)
//!
//! There is no hidden reactivity: every setter recomputes the output
//! and notifies the views, and a presentation layer binds to exactly
//! that contract.

use crate::adapters::format::FixedFormat;
use crate::core::config::FormConfig;
use crate::core::convert::Conversion;
use crate::core::unit::TemperatureUnit;
use crate::ports::{Format, FormSnapshot, InputError, InputResult, View};

/// The observable converter form
///
/// Owns the state triple, recomputes through the conversion core, and
/// re-renders attached views.
pub struct ConverterForm {
    /// Configuration
    config: FormConfig,

    /// Current input magnitude
    value: f64,

    /// Source unit
    from_unit: TemperatureUnit,

    /// Destination unit
    to_unit: TemperatureUnit,

    /// Output magnitude, recomputed on every change
    output: f64,

    /// Attached render-on-change observers
    views: Vec<Box<dyn View>>,

    /// Output formatter (Format port)
    formatter: Box<dyn Format>,
}

impl ConverterForm {
    /// Create a form with the default formatter
    ///
    /// Uses FixedFormat at the configured precision.
    /// For custom rendering, use `ConverterForm::with_formatter`.
    pub fn new(config: FormConfig) -> Self {
        let formatter = Box::new(FixedFormat::new(config.precision));
        Self::with_formatter(config, formatter)
    }

    /// Create with a custom formatter
    pub fn with_formatter(config: FormConfig, formatter: Box<dyn Format>) -> Self {
        let value = config.initial_value;
        let from_unit = config.initial_from;
        let to_unit = config.initial_to;
        let output = Conversion::new(value, from_unit, to_unit).run();

        Self {
            config,
            value,
            from_unit,
            to_unit,
            output,
            views: Vec::new(),
            formatter,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    // ========================================================================
    // STATE
    // ========================================================================

    /// Current input magnitude
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current source unit
    pub fn from_unit(&self) -> TemperatureUnit {
        self.from_unit
    }

    /// Current destination unit
    pub fn to_unit(&self) -> TemperatureUnit {
        self.to_unit
    }

    // ========================================================================
    // STATE CHANGES
    // ========================================================================

    /// Set the input magnitude
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.refresh();
    }

    /// Set the input magnitude from text
    ///
    /// The textual-input variant: malformed text is rejected with
    /// [`InputError::InvalidNumber`] and the form is left untouched.
    pub fn set_value_text(&mut self, text: &str) -> InputResult<f64> {
        let value: f64 = text
            .trim()
            .parse()
            .map_err(|_| InputError::InvalidNumber(text.to_string()))?;
        self.set_value(value);
        Ok(value)
    }

    /// Set the source unit
    pub fn set_from(&mut self, unit: TemperatureUnit) {
        self.from_unit = unit;
        self.refresh();
    }

    /// Set the destination unit
    pub fn set_to(&mut self, unit: TemperatureUnit) {
        self.to_unit = unit;
        self.refresh();
    }

    // ========================================================================
    // OUTPUT
    // ========================================================================

    /// The computed output magnitude
    pub fn output(&self) -> f64 {
        self.output
    }

    /// The output rendered through the Format port
    pub fn output_text(&self) -> String {
        self.formatter.format(self.output)
    }

    /// Current state and output as a render payload
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            value: self.value,
            from: self.from_unit,
            to: self.to_unit,
            output: self.output,
        }
    }

    // ========================================================================
    // VIEWS
    // ========================================================================

    /// Attach a render-on-change observer
    ///
    /// The view is rendered the current snapshot immediately.
    pub fn attach(&mut self, mut view: Box<dyn View>) {
        view.render(&self.snapshot());
        self.views.push(view);
    }

    /// Number of attached views
    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    /// Recompute the output and re-render every attached view
    ///
    /// Runs on every setter call, including writes that leave the field
    /// unchanged.
    fn refresh(&mut self) {
        self.output = Conversion::new(self.value, self.from_unit, self.to_unit).run();
        let snapshot = self.snapshot();
        for view in &mut self.views {
            view.render(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::view::MemoryView;

    fn create_test_form() -> ConverterForm {
        ConverterForm::new(FormConfig::default())
    }

    #[test]
    fn test_form_initial_output() {
        let form = create_test_form();

        // 0 °F -> Celsius = -160/9
        assert_eq!(form.value(), 0.0);
        assert_eq!(form.from_unit(), TemperatureUnit::Fahrenheit);
        assert_eq!(form.to_unit(), TemperatureUnit::Celsius);
        assert!((form.output() - (-160.0 / 9.0)).abs() < 1e-9);
    }

    #[test]
    fn test_form_set_value_recomputes() {
        let mut form = create_test_form();

        form.set_value(212.0);

        assert_eq!(form.output(), 100.0);
    }

    #[test]
    fn test_form_set_units_recompute() {
        let mut form = create_test_form();

        form.set_from(TemperatureUnit::Celsius);
        form.set_to(TemperatureUnit::Kelvin);

        assert_eq!(form.output(), 273.15);
    }

    #[test]
    fn test_form_set_value_text() {
        let mut form = create_test_form();

        let parsed = form.set_value_text(" 98.6 ").unwrap();

        assert_eq!(parsed, 98.6);
        assert_eq!(form.value(), 98.6);
        assert!((form.output() - 37.0).abs() < 1e-9);
    }

    #[test]
    fn test_form_invalid_text_leaves_state() {
        let mut form = create_test_form();
        form.set_value(100.0);
        let before = form.snapshot();

        let result = form.set_value_text("twelve");

        assert_eq!(
            result,
            Err(InputError::InvalidNumber("twelve".to_string()))
        );
        assert_eq!(form.snapshot(), before);
    }

    #[test]
    fn test_form_invalid_text_does_not_render() {
        let mut form = create_test_form();
        let view = MemoryView::shared();
        form.attach(Box::new(view.clone()));

        let _ = form.set_value_text("not a temp");

        // Only the render from attach
        assert_eq!(view.borrow().renders(), 1);
    }

    #[test]
    fn test_form_attach_renders_immediately() {
        let mut form = create_test_form();
        let view = MemoryView::shared();

        form.attach(Box::new(view.clone()));

        assert_eq!(form.view_count(), 1);
        let snapshot = *view.borrow().latest().unwrap();
        assert_eq!(snapshot, form.snapshot());
    }

    #[test]
    fn test_form_views_follow_changes() {
        let mut form = create_test_form();
        let view = MemoryView::shared();
        form.attach(Box::new(view.clone()));

        form.set_value(100.0);
        form.set_from(TemperatureUnit::Celsius);
        form.set_to(TemperatureUnit::Fahrenheit);

        // Attach render plus one per setter
        assert_eq!(view.borrow().renders(), 4);
        let snapshot = *view.borrow().latest().unwrap();
        assert_eq!(snapshot.value, 100.0);
        assert_eq!(snapshot.output, 212.0);
    }

    #[test]
    fn test_form_same_value_still_rerenders() {
        let mut form = create_test_form();
        let view = MemoryView::shared();
        form.attach(Box::new(view.clone()));

        form.set_value(form.value());

        assert_eq!(view.borrow().renders(), 2);
    }

    #[test]
    fn test_form_output_text_uses_precision() {
        let mut form = create_test_form();
        form.set_value(0.0);

        // -160/9 at two digits
        assert_eq!(form.output_text(), "-17.78");
    }

    #[test]
    fn test_form_with_custom_formatter() {
        struct Bare;
        impl Format for Bare {
            fn format(&self, value: f64) -> String {
                format!("{value}")
            }
        }

        let mut form = ConverterForm::with_formatter(FormConfig::default(), Box::new(Bare));
        form.set_value(212.0);

        assert_eq!(form.output_text(), "100");
    }
}

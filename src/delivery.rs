use serde::{Deserialize, Serialize};

use crate::entities::{DeliveryMode, FilterTab, VehicleClass};
use crate::error::{invalid_input_error, Error};
use crate::session::OrderSession;

/// Tab and vehicle picked on the food delivery screen.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryModeSelector {
    filter: FilterTab,
    selected: VehicleClass,
}

impl DeliveryModeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> FilterTab {
        self.filter
    }

    pub fn selected(&self) -> VehicleClass {
        self.selected
    }

    /// Switches tab and preselects the tab's vehicle.
    #[tracing::instrument(skip(self))]
    pub fn select_filter(&mut self, tab: FilterTab) {
        self.filter = tab;
        self.selected = tab.default_mode();
    }

    /// Only catalog modes can be picked; ride-only classes are refused.
    pub fn select_mode(&mut self, id: VehicleClass) -> Result<(), Error> {
        if DeliveryMode::find(id).is_none() {
            tracing::warn!("{} is not a delivery mode", id.name());
            return Err(invalid_input_error());
        }

        self.selected = id;
        Ok(())
    }

    pub fn selected_mode(&self) -> Option<DeliveryMode> {
        DeliveryMode::find(self.selected)
    }

    /// Catalog under the current tab.
    pub fn modes(&self) -> Vec<DeliveryMode> {
        sorted_modes(self.filter)
    }

    #[tracing::instrument(skip(self, session))]
    pub fn confirm_mode(&self, session: &mut OrderSession) {
        match self.selected_mode() {
            Some(mode) => session.set_delivery_mode(mode.id, mode.delivery_fee),
            None => tracing::warn!("no delivery mode selected, session left unchanged"),
        }
    }
}

pub fn sorted_modes(filter: FilterTab) -> Vec<DeliveryMode> {
    let mut modes = DeliveryMode::catalog();

    // sort_by is stable, ties keep catalog order
    match filter {
        FilterTab::Standard => {}
        FilterTab::Faster => modes.sort_by_key(|mode| mode.eta_minutes),
        FilterTab::Cheaper => modes.sort_by(|a, b| a.delivery_fee.total_cmp(&b.delivery_fee)),
    }

    modes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(modes: &[DeliveryMode]) -> Vec<VehicleClass> {
        modes.iter().map(|mode| mode.id).collect()
    }

    #[test]
    fn standard_keeps_catalog_order() {
        assert_eq!(sorted_modes(FilterTab::Standard), DeliveryMode::catalog());
    }

    #[test]
    fn faster_sorts_by_eta_with_stable_ties() {
        let modes = sorted_modes(FilterTab::Faster);

        assert!(modes.windows(2).all(|w| w[0].eta_minutes <= w[1].eta_minutes));
        assert_eq!(
            ids(&modes),
            vec![VehicleClass::Motorbike, VehicleClass::Car, VehicleClass::Bicycle]
        );
    }

    #[test]
    fn cheaper_sorts_by_fee() {
        let modes = sorted_modes(FilterTab::Cheaper);

        assert!(modes.windows(2).all(|w| w[0].delivery_fee <= w[1].delivery_fee));
        assert_eq!(
            ids(&modes),
            vec![VehicleClass::Bicycle, VehicleClass::Motorbike, VehicleClass::Car]
        );
    }

    #[test]
    fn selecting_a_filter_resets_the_mode_from_any_prior_state() {
        let tabs = [FilterTab::Standard, FilterTab::Faster, FilterTab::Cheaper];
        let modes = [VehicleClass::Car, VehicleClass::Motorbike, VehicleClass::Bicycle];

        for tab in tabs {
            for prior in modes {
                let mut selector = DeliveryModeSelector::new();
                selector.select_mode(prior).unwrap();
                selector.select_filter(tab);

                assert_eq!(selector.filter(), tab);
                assert_eq!(selector.selected(), tab.default_mode());
            }
        }
    }

    #[test]
    fn confirm_mode_records_mode_and_fee_in_session() {
        let mut selector = DeliveryModeSelector::new();
        let mut session = OrderSession::new();

        selector.select_filter(FilterTab::Cheaper);
        selector.confirm_mode(&mut session);

        assert_eq!(session.delivery_type(), VehicleClass::Bicycle);
        assert_eq!(session.delivery_fee(), 25.0);
    }

    #[test]
    fn ride_only_classes_cannot_be_selected() {
        let mut selector = DeliveryModeSelector::new();
        selector.select_mode(VehicleClass::Bicycle).unwrap();

        assert!(selector.select_mode(VehicleClass::Comfort).is_err());
        assert!(selector.select_mode(VehicleClass::Xl).is_err());
        assert_eq!(selector.selected(), VehicleClass::Bicycle);
    }

    #[test]
    fn confirm_mode_skips_a_selection_outside_the_catalog() {
        // a stored selector can still carry a ride-only class
        let selector: DeliveryModeSelector =
            serde_json::from_str(r#"{"filter":"standard","selected":"xl"}"#).unwrap();
        let mut session = OrderSession::new();
        session.set_delivery_mode(VehicleClass::Motorbike, 40.0);

        selector.confirm_mode(&mut session);

        assert_eq!(session.delivery_type(), VehicleClass::Motorbike);
        assert_eq!(session.delivery_fee(), 40.0);
    }
}

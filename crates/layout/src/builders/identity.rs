//! Sidebar identity block: photo, name, designation.
//!
//! Unlike the titled sections, identity has no heading and no entry
//! list; it always sits at the very top of the sidebar.

use vitae_types::IdentityInfo;

use crate::LayoutError;
use crate::config::LayoutOptions;
use crate::measure::Measure;
use crate::placement::PlacementProps;
use crate::state::LayoutState;

pub fn build(
    mut state: LayoutState,
    identity: &IdentityInfo,
    opts: &LayoutOptions,
    measure: &dyn Measure,
) -> Result<LayoutState, LayoutError> {
    if identity.photo.is_some() {
        let props = PlacementProps::Photo {
            uri: identity.photo.clone(),
        };
        let h = measure.height(&props)?;
        state.push_left("identity-photo", 0.0, h, props);
    }

    let name = PlacementProps::NameBlock {
        name: identity.name.clone(),
    };
    let h = measure.height(&name)?;
    state.push_left("identity-name", opts.margin_bullet, h, name);

    let designation = PlacementProps::Designation {
        text: identity.designation.clone(),
    };
    let h = measure.height(&designation)?;
    state.push_left("identity-designation", opts.margin_bullet, h, designation);

    Ok(state)
}

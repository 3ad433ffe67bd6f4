use std::collections::HashMap;

use tracing::info;

use crate::colormap::{build_transfer_function, next_preset};
use crate::model::{PaneId, PaneState};
use crate::viewer::{PaneViewer, SpatialTransform, ViewerError};

use super::{ControllerConfig, ControllerError, Result};

#[derive(Debug)]
struct PaneEntry<V> {
    state: PaneState,
    viewer: V,
}

/// Owns the per-pane manipulation state and the bound viewer handles, and
/// translates user actions into adapter calls against the selected pane.
///
/// State is mutated only after every external call of an operation has
/// succeeded, so a failed operation never leaves flags inconsistent with
/// the engine-side state.
#[derive(Debug)]
pub struct PaneController<V> {
    panes: HashMap<PaneId, PaneEntry<V>>,
    selected: Option<PaneId>,
    config: ControllerConfig,
}

impl<V> Default for PaneController<V> {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl<V> PaneController<V> {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            panes: HashMap::new(),
            selected: None,
            config,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Binds a pane to its rendering surface, starting from default state.
    /// Rebinding an id replaces the previous surface.
    pub fn bind_pane(&mut self, pane: PaneId, viewer: V) {
        self.panes.insert(
            pane,
            PaneEntry {
                state: PaneState::default(),
                viewer,
            },
        );
    }

    /// Unbinds a pane, dropping its state. Clears the selection if the
    /// unbound pane was the selected one.
    pub fn unbind_pane(&mut self, pane: PaneId) -> Option<V> {
        if self.selected == Some(pane) {
            self.selected = None;
        }
        self.panes.remove(&pane).map(|entry| entry.viewer)
    }

    pub fn select_pane(&mut self, pane: PaneId) -> Result<()> {
        if !self.panes.contains_key(&pane) {
            return Err(ControllerError::PaneNotBound(pane));
        }
        self.selected = Some(pane);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_pane(&self) -> Option<PaneId> {
        self.selected
    }

    pub fn is_selected(&self, pane: PaneId) -> bool {
        self.selected == Some(pane)
    }

    pub fn pane_state(&self, pane: PaneId) -> Option<&PaneState> {
        self.panes.get(&pane).map(|entry| &entry.state)
    }

    pub fn viewer(&self, pane: PaneId) -> Option<&V> {
        self.panes.get(&pane).map(|entry| &entry.viewer)
    }

    pub fn bound_panes(&self) -> Vec<PaneId> {
        let mut panes: Vec<PaneId> = self.panes.keys().copied().collect();
        panes.sort_by_key(|pane| pane.as_str());
        panes
    }

    fn selected_entry_mut(&mut self) -> Result<(PaneId, &mut PaneState, &mut V)> {
        let pane = self.selected.ok_or(ControllerError::NoPaneSelected)?;
        let entry = self
            .panes
            .get_mut(&pane)
            .ok_or(ControllerError::PaneNotBound(pane))?;
        Ok((pane, &mut entry.state, &mut entry.viewer))
    }
}

impl<V: PaneViewer> PaneController<V> {
    /// Multiplies the camera parallel scale by the configured zoom step
    /// (clamped), magnifying the image.
    pub fn zoom(&mut self) -> Result<()> {
        let config = self.config;
        let (pane, _, viewer) = self.selected_entry_mut()?;
        let mut camera = viewer.camera()?;
        camera.parallel_scale = (camera.parallel_scale * config.zoom_step)
            .clamp(config.min_parallel_scale, config.max_parallel_scale);
        viewer.set_camera(&camera)?;
        viewer.render()?;
        info!(pane = %pane, parallel_scale = camera.parallel_scale, "applied zoom step");
        Ok(())
    }

    pub fn flip_horizontal(&mut self) -> Result<()> {
        self.flip_axis(0)
    }

    pub fn flip_vertical(&mut self) -> Result<()> {
        self.flip_axis(1)
    }

    /// Negates the in-plane scale on one axis, pivoting about the image
    /// center. Re-centering the transform origin forces a camera reset, so
    /// the pre-flip zoom level is restored afterwards.
    fn flip_axis(&mut self, axis: usize) -> Result<()> {
        let (pane, _, viewer) = self.selected_entry_mut()?;
        let saved_scale = viewer.camera()?.parallel_scale;
        let center = viewer.image_bounds()?.center();
        let mut transform = viewer.spatial_transform()?;
        transform.origin = center;
        transform.scale[axis] = -transform.scale[axis];
        viewer.set_spatial_transform(&transform)?;
        viewer.reset_camera()?;
        let mut camera = viewer.camera()?;
        camera.parallel_scale = saved_scale;
        viewer.set_camera(&camera)?;
        viewer.render()?;
        info!(
            pane = %pane,
            axis = if axis == 0 { "horizontal" } else { "vertical" },
            "flipped pane"
        );
        Ok(())
    }

    /// Adds the configured rotation step about the view-plane normal,
    /// pivoting about the image center. Composes additively with prior
    /// rotations.
    pub fn rotate(&mut self) -> Result<()> {
        let step = self.config.rotation_step_deg;
        let (pane, _, viewer) = self.selected_entry_mut()?;
        let center = viewer.image_bounds()?.center();
        let mut transform = viewer.spatial_transform()?;
        transform.origin = center;
        transform.rotation_deg += step;
        viewer.set_spatial_transform(&transform)?;
        viewer.render()?;
        info!(pane = %pane, rotation_deg = transform.rotation_deg, "rotated pane");
        Ok(())
    }

    /// Two-state toggle per pane.
    ///
    /// Normal -> Inverted snapshots the active window/level (in whichever
    /// representation the viewer reports) before raising the invert flag.
    /// Inverted -> Normal restores that snapshot in its captured
    /// representation and, deliberately, also drops any active colormap:
    /// leaving inversion always returns the pane to grayscale.
    pub fn toggle_invert(&mut self) -> Result<()> {
        let (pane, state, viewer) = self.selected_entry_mut()?;
        if !state.inverted {
            let mut properties = viewer.display_properties()?;
            let snapshot = properties
                .window_level
                .clone()
                .ok_or(ViewerError::CapabilityMissing(
                    "viewer reports no window/level to snapshot",
                ))?;
            properties.invert = true;
            viewer.set_display_properties(&properties)?;
            viewer.render()?;
            state.inverted = true;
            state.saved_window_level = Some(snapshot);
            info!(pane = %pane, "entered inverted display");
        } else {
            let mut properties = viewer.display_properties()?;
            properties.window_level = state.saved_window_level.clone();
            properties.invert = false;
            properties.colormap = None;
            viewer.set_display_properties(&properties)?;
            viewer.set_lut_coloring(false)?;
            viewer.render()?;
            state.inverted = false;
            state.saved_window_level = None;
            state.active_colormap = None;
            info!(pane = %pane, "restored normal display");
        }
        Ok(())
    }

    /// Advances the pane one step through the colormap cycle and installs
    /// the result. Returns the new active preset name (`None` = grayscale).
    pub fn cycle_colormap(&mut self) -> Result<Option<&'static str>> {
        let (pane, state, viewer) = self.selected_entry_mut()?;
        let next = next_preset(state.active_colormap.as_deref())?;
        match next {
            Some(name) => {
                let (data_min, data_max) = viewer.intensity_range()?;
                let samples = build_transfer_function(name, data_min, data_max)?;
                viewer.clear_color_points()?;
                for sample in &samples {
                    viewer.add_color_point(*sample)?;
                }
                viewer.commit_color_points()?;
                viewer.set_lut_coloring(true)?;
                let mut properties = viewer.display_properties()?;
                properties.colormap = Some(name.to_string());
                viewer.set_display_properties(&properties)?;
            }
            None => {
                viewer.set_lut_coloring(false)?;
                let mut properties = viewer.display_properties()?;
                properties.colormap = None;
                viewer.set_display_properties(&properties)?;
            }
        }
        viewer.render()?;
        state.active_colormap = next.map(str::to_string);
        info!(pane = %pane, colormap = next.unwrap_or("grayscale"), "cycled colormap");
        Ok(next)
    }

    /// Reloads the displayed frame (discarding all engine-side transform,
    /// camera and property state), refits the camera, reissues a neutral
    /// display payload and clears the pane state. Selection is untouched.
    pub fn reset(&mut self) -> Result<()> {
        let (pane, state, viewer) = self.selected_entry_mut()?;
        let frame_id = viewer.displayed_frame()?;
        viewer.reload_frame(&frame_id)?;
        viewer.reset_camera()?;
        viewer.set_lut_coloring(false)?;
        let mut properties = viewer.display_properties()?;
        properties.invert = false;
        properties.colormap = None;
        viewer.set_display_properties(&properties)?;
        viewer.set_spatial_transform(&SpatialTransform::identity())?;
        viewer.render()?;
        *state = PaneState::default();
        info!(pane = %pane, frame = %frame_id, "reset pane");
        Ok(())
    }
}

//! The bar widget: selection state, notch animation and label transitions.

use std::cell::RefCell;
use std::rc::Rc;

use notchbar_animation::{FloatAnimationState, FrameClock, VisibilityAnimation};
use notchbar_ui_graphics::{Brush, Density, DrawScope, DrawScopeDefault, Point};

use crate::error::BarError;
use crate::frame::{BarFrame, ItemFrame, LabelFrame};
use crate::geometry::{build_bar_path, middle_position, BarMetrics};
use crate::item::BarItem;
use crate::layout::BarLayout;
use crate::state::{BarState, NotchPhase};
use crate::style::BarStyle;
use crate::text::{MonospaceTextMeasurer, TextMeasurer};

type SelectionListener = Box<dyn FnMut(usize)>;

pub struct FancyBottomBar {
    items: Vec<BarItem>,
    style: BarStyle,
    metrics: BarMetrics,
    state: Rc<RefCell<BarState>>,
    clock: FrameClock,
    notch: FloatAnimationState,
    labels: Vec<VisibilityAnimation>,
    text_measurer: Box<dyn TextMeasurer>,
    on_selection_changed: Option<SelectionListener>,
}

impl FancyBottomBar {
    /// Creates a bar with the first item selected. The bar has zero width
    /// until [`measure`](Self::measure) is called.
    pub fn new(
        items: Vec<BarItem>,
        style: BarStyle,
        density: Density,
        clock: &FrameClock,
    ) -> Result<Self, BarError> {
        if items.is_empty() {
            return Err(BarError::NoItems);
        }
        style.validate()?;

        let state = Rc::new(RefCell::new(BarState::new()));
        let initial = middle_position(0, items.len(), 0.0);
        let notch = FloatAnimationState::new(initial, clock, "notch");
        let settle = Rc::clone(&state);
        notch.set_finished_listener(move |_| settle.borrow_mut().settle());

        let mut bar = Self {
            metrics: BarMetrics::resolve(&style, density),
            labels: Vec::new(),
            items,
            style,
            state,
            clock: clock.clone(),
            notch,
            text_measurer: Box::new(MonospaceTextMeasurer::default()),
            on_selection_changed: None,
        };
        bar.rebuild_labels();
        bar.recompute();
        Ok(bar)
    }

    pub fn with_text_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.text_measurer = Box::new(measurer);
        self
    }

    pub fn set_on_selection_changed(&mut self, listener: impl FnMut(usize) + 'static) {
        self.on_selection_changed = Some(Box::new(listener));
    }

    /// Layout transition: the host measured the bar at `width` pixels.
    pub fn measure(&mut self, width: f32) -> Result<(), BarError> {
        if !width.is_finite() || width < 0.0 {
            return Err(BarError::InvalidWidth { width });
        }
        let changed = self.state.borrow_mut().resize(width);
        if changed {
            log::debug!("bar measured at {width}px");
            self.recompute();
        }
        Ok(())
    }

    /// Selection transition.
    pub fn select(&mut self, index: usize) -> Result<(), BarError> {
        let count = self.items.len();
        if index >= count {
            return Err(BarError::IndexOutOfRange { index, count });
        }
        let changed = self.state.borrow_mut().select(index);
        if changed {
            log::debug!("selected item {index} of {count}");
            if let Some(listener) = self.on_selection_changed.as_mut() {
                listener(index);
            }
            self.recompute();
        }
        Ok(())
    }

    /// Routes a tap at `point` (bar coordinates) to the item under it.
    /// Returns the tapped index, or `None` when the tap hit no item.
    pub fn on_tap(&mut self, point: Point) -> Option<usize> {
        let Some(index) = self.layout().hit_test(point.x, point.y) else {
            log::debug!("tap at ({}, {}) hit no item", point.x, point.y);
            return None;
        };
        self.select(index).ok()?;
        Some(index)
    }

    /// Replaces the items. The selection is clamped to the new range.
    pub fn set_items(&mut self, items: Vec<BarItem>) -> Result<(), BarError> {
        if items.is_empty() {
            return Err(BarError::NoItems);
        }
        let last = items.len() - 1;
        self.items = items;
        let clamped = self.selected_index() > last && self.state.borrow_mut().select(last);
        if clamped {
            if let Some(listener) = self.on_selection_changed.as_mut() {
                listener(last);
            }
        }
        self.rebuild_labels();
        self.recompute();
        Ok(())
    }

    pub fn items(&self) -> &[BarItem] {
        &self.items
    }

    pub fn style(&self) -> &BarStyle {
        &self.style
    }

    pub fn metrics(&self) -> &BarMetrics {
        &self.metrics
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn selected_index(&self) -> usize {
        self.state.borrow().selected_index()
    }

    pub fn bar_width(&self) -> f32 {
        self.state.borrow().width()
    }

    pub fn phase(&self) -> NotchPhase {
        self.state.borrow().phase()
    }

    /// Where the notch is heading.
    pub fn notch_target(&self) -> f32 {
        self.notch.target()
    }

    /// Where the notch is drawn this frame.
    pub fn notch_position(&self) -> f32 {
        self.notch.value()
    }

    pub fn is_animating(&self) -> bool {
        self.notch.is_running() || self.labels.iter().any(VisibilityAnimation::is_running)
    }

    /// Current placement of every item.
    pub fn layout(&self) -> BarLayout {
        let label_sizes: Vec<_> = self
            .items
            .iter()
            .zip(&self.labels)
            .map(|(item, label)| {
                label.is_rendered().then(|| {
                    self.text_measurer
                        .measure(&item.label, self.metrics.label_text_size)
                })
            })
            .collect();
        BarLayout::measure(self.bar_width(), &self.metrics, &label_sizes)
    }

    /// Draws the current frame. Reads animated values; never mutates state.
    pub fn render(&self) -> BarFrame {
        let layout = self.layout();
        let notch_center = self.notch.value();
        let bar_path = build_bar_path(layout.size, &self.metrics, notch_center);
        let selected = self.selected_index();

        let mut scope = DrawScopeDefault::new(layout.size);
        scope.draw_path(bar_path.clone(), Brush::solid(self.style.bar_color));

        let mut items = Vec::with_capacity(self.items.len());
        for (index, ((item, placement), visibility)) in self
            .items
            .iter()
            .zip(&layout.items)
            .zip(&self.labels)
            .enumerate()
        {
            let is_selected = index == selected;
            let tint = if is_selected {
                self.style.selected_tint
            } else {
                self.style.unselected_tint
            };
            scope.draw_path(item.icon.placed_in(placement.icon), Brush::solid(tint));

            let label = placement.label.and_then(|rect| {
                visibility.frame(rect.height).map(|transition| LabelFrame {
                    text: item.label.clone(),
                    rect: rect.translate(0.0, transition.offset_y),
                    alpha: transition.alpha,
                })
            });
            items.push(ItemFrame {
                index,
                selected: is_selected,
                slot: placement.slot,
                icon: placement.icon,
                tint,
                label,
            });
        }

        for label in items.iter().filter_map(|item| item.label.as_ref()) {
            scope.draw_text(
                label.rect,
                &label.text,
                self.style.label_color.fade(label.alpha),
                self.metrics.label_text_size,
            );
        }

        BarFrame {
            size: layout.size,
            notch_center,
            bar_path,
            items,
            primitives: scope.into_primitives(),
        }
    }

    /// Recomputes derived geometry after any state mutation and hands the new
    /// targets to the animations.
    fn recompute(&self) {
        let (selected, target, spec) = {
            let state = self.state.borrow();
            let target = middle_position(state.selected_index(), self.items.len(), state.width());
            let spec = state.phase().notch_spec(self.style.notch_animation);
            (state.selected_index(), target, spec)
        };
        // A snap finishes inside `update`, which moves the phase to Steady.
        if self.notch.update(target, spec) {
            log::trace!("notch -> {target} ({}ms)", spec.duration_millis);
        }
        for (index, label) in self.labels.iter().enumerate() {
            label.set_visible(index == selected);
        }
    }

    fn rebuild_labels(&mut self) {
        let selected = self.selected_index();
        self.labels = (0..self.items.len())
            .map(|index| {
                VisibilityAnimation::new(
                    index == selected,
                    self.style.label_enter,
                    self.style.label_exit,
                    &self.clock,
                )
            })
            .collect();
    }
}

#[cfg(test)]
#[path = "tests/bar_tests.rs"]
mod tests;

use std::collections::VecDeque;

use dioxus::prelude::*;

use crate::components::app_view::AppView;

const NAV_HISTORY_LIMIT: usize = 32;

/// Signal-backed view switcher with a bounded back stack.
#[derive(Clone)]
pub struct Navigation {
    current_view: Signal<AppView>,
    history: Signal<VecDeque<AppView>>,
}

impl Navigation {
    pub fn new(current_view: Signal<AppView>, history: Signal<VecDeque<AppView>>) -> Self {
        Self {
            current_view,
            history,
        }
    }

    pub fn current(&self) -> AppView {
        let current_view = self.current_view.clone();
        current_view()
    }

    pub fn navigate_to(&self, target: AppView) {
        let mut current_view = self.current_view.clone();
        let previous = current_view();
        if previous == target {
            return;
        }

        let mut history = self.history.clone();
        history.with_mut(|stack| {
            stack.push_back(previous);
            while stack.len() > NAV_HISTORY_LIMIT {
                stack.pop_front();
            }
        });

        current_view.set(target);
    }

    pub fn can_go_back(&self) -> bool {
        let history = self.history.clone();
        !history().is_empty()
    }

    pub fn go_back(&self) -> Option<AppView> {
        let mut history = self.history.clone();
        let mut previous = None;
        history.with_mut(|stack| {
            previous = stack.pop_back();
        });
        if let Some(view) = previous {
            self.current_view.clone().set(view);
        }
        previous
    }
}

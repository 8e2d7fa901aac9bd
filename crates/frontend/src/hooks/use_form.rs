//! Yew binding for [`FormController`]

use backoffice_core::{CoreError, FormController, FormSchema};
use std::rc::Rc;
use yew::prelude::*;

/// Reducer state wrapping one form
#[derive(Clone, Debug, PartialEq)]
pub struct FormState<S: FormSchema>(pub FormController<S>);

pub enum FormAction<S> {
    Edit(Box<dyn FnOnce(&mut S)>),
    Touch(&'static str),
    Begin,
    Finish(Result<(), String>),
    Reset(S),
}

impl<S: FormSchema + 'static> Reducible for FormState<S> {
    type Action = FormAction<S>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut controller = self.0.clone();
        match action {
            FormAction::Edit(edit) => controller.set_field(edit),
            FormAction::Touch(field) => controller.touch(field),
            FormAction::Begin => {
                if let Err(error) = controller.begin_submit() {
                    tracing::debug!(%error, "Submit rejected");
                }
            }
            FormAction::Finish(outcome) => controller.finish(outcome),
            FormAction::Reset(values) => controller = FormController::new(values),
        }
        Rc::new(Self(controller))
    }
}

/// Handle returned by [`use_form`]
#[derive(Clone)]
pub struct UseFormHandle<S: FormSchema + 'static> {
    state: UseReducerHandle<FormState<S>>,
}

impl<S: FormSchema + 'static> UseFormHandle<S> {
    pub fn controller(&self) -> &FormController<S> {
        &self.state.0
    }

    pub fn values(&self) -> &S {
        self.state.0.values()
    }

    /// `oninput` callback writing the new text through `assign`
    pub fn input(&self, assign: fn(&mut S, String)) -> Callback<String> {
        let state = self.state.clone();
        Callback::from(move |value: String| {
            state.dispatch(FormAction::Edit(Box::new(move |values| assign(values, value))));
        })
    }

    pub fn blur(&self, field: &'static str) -> Callback<()> {
        let state = self.state.clone();
        Callback::from(move |()| state.dispatch(FormAction::Touch(field)))
    }

    pub fn error(&self, field: &str) -> Option<String> {
        self.state.0.visible_error(field)
    }

    /// Validate and move to `Submitting`, handing out the values to send.
    ///
    /// On rejection every field is marked touched so the errors show.
    pub fn begin_submit(&self) -> Result<S, CoreError> {
        let mut probe = self.state.0.clone();
        let values = probe.begin_submit();
        self.state.dispatch(FormAction::Begin);
        values
    }

    pub fn finish(&self, outcome: Result<(), String>) {
        self.state.dispatch(FormAction::Finish(outcome));
    }

    pub fn reset(&self, values: S) {
        self.state.dispatch(FormAction::Reset(values));
    }
}

#[hook]
pub fn use_form<S, F>(init: F) -> UseFormHandle<S>
where
    S: FormSchema + 'static,
    F: FnOnce() -> S,
{
    let state = use_reducer(move || FormState(FormController::new(init())));
    UseFormHandle { state }
}

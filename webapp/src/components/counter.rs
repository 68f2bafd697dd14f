use yew::prelude::*;
use crate::config::COUNTER_LABEL;

/// Button that shows how many times it has been clicked.
///
/// The count lives in the component, so it starts at zero on every mount.
pub struct Counter {
    count: u64,
}

pub enum Msg {
    Increment,
}

impl Counter {
    fn increment(&mut self) {
        self.count += 1;
        log::debug!("count -> {}", self.count);
    }

    fn label(&self) -> String {
        format!("{} {}", COUNTER_LABEL, self.count)
    }
}

impl Component for Counter {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        log::debug!("counter created");
        Counter { count: 0 }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Increment => {
                self.increment();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.link().callback(|_: MouseEvent| Msg::Increment);

        html! {
            <button
                {onclick}
                class="px-4 py-2 bg-indigo-600 text-white rounded-md hover:bg-indigo-700 transition-colors"
            >
                { self.label() }
            </button>
        }
    }
}

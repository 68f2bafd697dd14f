use yew::prelude::*;
use crate::components::counter::Counter;
use crate::config::{PAGE_SUBTITLE, PAGE_TITLE};


#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="min-h-screen bg-gray-100 py-6 flex flex-col justify-center sm:py-12">
            <div class="relative py-3 sm:max-w-xl sm:mx-auto">
                <div class="relative px-4 py-10 bg-white shadow-lg sm:rounded-3xl sm:p-20">
                    <div class="max-w-md mx-auto">
                        <div class="divide-y divide-gray-200">
                            <div class="py-8 text-base leading-6 space-y-4 text-gray-700 sm:text-lg sm:leading-7">
                                <h1 class="text-3xl font-bold text-center mb-8 text-indigo-600">
                                    { PAGE_TITLE }
                                </h1>
                                <p class="text-center">{ PAGE_SUBTITLE }</p>
                                <div class="mt-8 text-center">
                                    <Counter />
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

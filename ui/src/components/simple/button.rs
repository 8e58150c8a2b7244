use dioxus::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum ButtonVariant {
    /// Filled Spotify-green action button
    #[default]
    Primary,
    /// Destructive action (logout, remove)
    Danger,
}

impl ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "chain-btn",
            ButtonVariant::Danger => "font-mono uppercase text-xs tracking-widest px-4 py-2 text-red-400 hover:text-red-300 cursor-pointer",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct Props {
    children: Element,
    #[props(into)]
    onclick: EventHandler<MouseEvent>,
    #[props(optional, default)]
    variant: ButtonVariant,
    #[props(optional, default)]
    disabled: bool,
    #[props(optional, into)]
    class: String,
}

#[component]
pub fn Button(props: Props) -> Element {
    let disabled_classes = if props.disabled {
        "opacity-30 cursor-not-allowed pointer-events-none"
    } else {
        ""
    };
    let classes = format!(
        "{} {} {} rounded",
        props.variant.classes(),
        disabled_classes,
        props.class
    );

    rsx! {
        button {
            class: "{classes}",
            disabled: props.disabled,
            onclick: move |evt| {
                if !props.disabled {
                    props.onclick.call(evt)
                }
            },
            {props.children}
        }
    }
}

use proc_macro::TokenStream;
use quote::quote;
use syn::Error;
use syn::spanned::Spanned;

/// This will start a preconfigured runtime for your App. Make sure you have a Default implementation
#[proc_macro_derive(GravitasApp)]
pub fn gravitas_app(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    if !input.generics.params.is_empty() {
        return Error::new(
            input.generics.span(),
            "A GravitasApp cannot be generic since it's used to generate the main function",
        )
        .to_compile_error()
        .into();
    }

    let logger = cfg!(feature = "derive_env_logger").then(|| {
        quote!(
            ::env_logger::builder()
                .filter_level(::gravitas::log::LevelFilter::Info)
                .parse_default_env()
                .init();
        )
    });

    let app_name = &input.ident;

    quote! {
        fn main() {
            let app = ::gravitas::AppRuntime::default_config(#app_name::default());

            #logger

            if let Err(e) = ::gravitas::AppSettings::run(app) {
                ::gravitas::log::error!("{e}");
            }
        }
    }
    .into()
}

use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// A `#[test]` that installs a `tracing` subscriber writing to the test output.
///
/// Filtering follows `RUST_LOG`. The crate using it needs `tracing-subscriber`
/// with the `env-filter` feature in its dev-dependencies.
#[proc_macro_attribute]
pub fn test(attr: TokenStream, input: TokenStream) -> TokenStream {
    parse_macro_input!(attr as syn::parse::Nothing);
    let mut item_fn = parse_macro_input!(input as syn::ItemFn);

    let body = &item_fn.block;
    let block: syn::Block = syn::parse_quote!({
        let _ = ::tracing_subscriber::fmt()
            .with_env_filter(::tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
        #body
    });
    item_fn.block = Box::new(block);

    TokenStream::from(quote! {
        #[::core::prelude::v1::test]
        #item_fn
    })
}

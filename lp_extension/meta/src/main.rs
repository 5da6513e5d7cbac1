fn main() {
    multiversx_sc_meta_lib::cli_main::<lp_extension::AbiProvider>();
}

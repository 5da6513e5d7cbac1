fn main() {
    multiversx_sc_meta_lib::cli_main::<curve_pool_mock::AbiProvider>();
}

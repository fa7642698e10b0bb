#[tokio::main(flavor = "current_thread")]
async fn main() {
    let code = figma_layers_lib::run(std::env::args_os()).await;
    std::process::exit(code);
}

fn main() {
    airfryx_frontend::run();
}

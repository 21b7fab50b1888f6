fn main() -> std::io::Result<()> {
    agri_command::run()
}

fn main() {
    if lightswitch_web::start().is_none() {
        lightswitch_web::util::clog("no window/document; nothing bound");
    }
}

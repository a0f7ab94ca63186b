// Fixed DOM contract: these elements are owned by the host document and must
// exist before the view binder starts.
pub const CHANNEL_LIST_ID: &str = "channels";
pub const CHANNEL_INFO_ID: &str = "channel-info";
pub const MESSAGE_LIST_ID: &str = "messages";

// Class names applied to generated nodes so the host stylesheet can target them.
pub const CHANNEL_NODE_CLASS: &str = "channel";
pub const MESSAGE_NODE_CLASS: &str = "message";

// Host -> view event names.
pub const EVENT_ADD_CHANNEL: &str = "add_channel";
pub const EVENT_SET_CURRENT_CHANNEL: &str = "set_current_channel";

// View -> host command names.
pub const CMD_CHANNEL_SELECT: &str = "channel_select";

mod session_codec;

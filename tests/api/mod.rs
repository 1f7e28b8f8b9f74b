mod file_source;
